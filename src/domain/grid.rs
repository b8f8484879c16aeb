use std::fmt;

use rand::Rng;

use super::{AreaPercent, Cell};
use crate::error::LifeError;

/// Probability that a randomized cell comes up alive
pub const ALIVE_PROBABILITY: f64 = 0.3;

/// Fixed-size board of cells, addressed as `(row, col)`.
///
/// Neighbor counting wraps around the edges (the board is a torus). Direct
/// writes never wrap: anything outside `[0, rows) x [0, cols)` is rejected or
/// clipped.
#[derive(Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    /// Next generation is built here, then swapped with `cells`
    scratch: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
            scratch: vec![Cell::Dead; rows * cols],
        }
    }

    /// Grid covering a `width x height` pixel surface with square cells of `cell_size`.
    pub fn for_surface(width: u32, height: u32, cell_size: u32) -> Self {
        Self::new((height / cell_size) as usize, (width / cell_size) as usize)
    }

    /// Build a grid with the given cells alive. Positions outside the grid are dropped.
    pub fn with_live_cells(rows: usize, cols: usize, live: &[(usize, usize)]) -> Self {
        let mut grid = Self::new(rows, cols);
        for &(row, col) in live {
            grid.set(row, col, Cell::Alive);
        }
        grid
    }

    /// `(rows, cols)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.contains(row, col)
            .then(|| self.cells[self.index(row, col)])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Set cell at position. Returns false, leaving the grid untouched, when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if !self.contains(row, col) {
            return false;
        }

        let idx = self.index(row, col);
        self.cells[idx] = cell;
        true
    }

    /// Set a cell alive at a signed offset from `(row, col)`, clipping at the edges
    pub(crate) fn set_offset(&mut self, row: usize, col: usize, dr: isize, dc: isize) {
        let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            return;
        };
        self.set(r, c, Cell::Alive);
    }

    /// Flip a single cell, returning its new state
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell, LifeError> {
        if !self.contains(row, col) {
            return Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }

        let idx = self.index(row, col);
        self.cells[idx] = self.cells[idx].toggle();
        Ok(self.cells[idx])
    }

    /// Count live neighbors with toroidal wrapping
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let up = (row + self.rows - 1) % self.rows;
        let down = (row + 1) % self.rows;
        let left = (col + self.cols - 1) % self.cols;
        let right = (col + 1) % self.cols;

        [
            (up, left),
            (up, col),
            (up, right),
            (row, left),
            (row, right),
            (down, left),
            (down, col),
            (down, right),
        ]
        .into_iter()
        .filter(|&(r, c)| self.cells[self.index(r, c)].is_alive())
        .count() as u8
    }

    /// Advance one generation.
    ///
    /// Every cell of the next generation is computed from the current one before
    /// the two buffers are swapped, so no partially updated state is observable.
    pub fn step(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = self.index(row, col);
                let next = self.cells[idx].evolve(self.live_neighbors(row, col));
                self.scratch[idx] = next;
            }
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Re-roll every cell in the centered region covering `area` of each dimension.
    /// Cells outside the region keep their state.
    pub fn randomize_region<R: Rng + ?Sized>(&mut self, area: AreaPercent, rng: &mut R) {
        let rows = area.span(self.rows);
        let cols = area.span(self.cols);

        for row in rows {
            for col in cols.clone() {
                let idx = self.index(row, col);
                self.cells[idx] = Cell::from(rng.random_bool(ALIVE_PROBABILITY));
            }
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Positions of all live cells, row-major
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(idx, _)| (idx / self.cols, idx % self.cols))
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.rows, self.cols)?;
        for row in self.cells.chunks(self.cols.max(1)) {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
