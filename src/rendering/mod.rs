mod color;
mod panel;
mod surface;

use macroquad::color::Color;

use crate::domain::Grid;

pub use color::{ColorSource, parse_hex_color};
pub use panel::draw_controls;
pub use surface::{DrawCommand, MacroquadSurface, RecordingSurface, Surface};

/// Grid line width in pixels
pub const GRID_LINE_WIDTH: f32 = 0.5;

/// Everything besides the grid itself that decides what a frame looks like
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub cell_size: f32,
    pub show_grid_lines: bool,
    pub grid_line_color: Color,
    pub fill_color: Color,
}

/// Redraw the whole surface from `grid`.
///
/// Clears, then draws grid lines at `cell_size` spacing if enabled, then one
/// filled square per live cell. Calling it twice with the same input draws the
/// same frame.
pub fn draw_grid<S: Surface + ?Sized>(grid: &Grid, options: &RenderOptions, surface: &mut S) {
    let (width, height) = surface.size();
    let (rows, cols) = grid.dimensions();
    let size = options.cell_size;

    surface.clear();

    if options.show_grid_lines {
        for row in 0..=rows {
            let y = row as f32 * size;
            surface.line((0.0, y), (width, y), GRID_LINE_WIDTH, options.grid_line_color);
        }

        for col in 0..=cols {
            let x = col as f32 * size;
            surface.line((x, 0.0), (x, height), GRID_LINE_WIDTH, options.grid_line_color);
        }
    }

    for (row, col) in grid.live_cells() {
        surface.fill_rect(
            col as f32 * size,
            row as f32 * size,
            size,
            size,
            options.fill_color,
        );
    }
}
