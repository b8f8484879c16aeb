use std::fmt;
use std::str::FromStr;

use super::Grid;
use crate::error::LifeError;

/// Letter-shaped patterns that can be stamped onto the middle of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    I,
    H,
    O,
    S,
}

impl Shape {
    pub const fn all() -> [Shape; 4] {
        [Shape::I, Shape::H, Shape::O, Shape::S]
    }

    /// Keyboard letter that stamps this shape
    pub const fn letter(self) -> char {
        match self {
            Shape::I => 'I',
            Shape::H => 'H',
            Shape::O => 'O',
            Shape::S => 'S',
        }
    }

    /// Case-insensitive lookup by key
    pub fn from_key(key: char) -> Option<Shape> {
        match key.to_ascii_uppercase() {
            'I' => Some(Shape::I),
            'H' => Some(Shape::H),
            'O' => Some(Shape::O),
            'S' => Some(Shape::S),
            _ => None,
        }
    }

    /// Short help text for the control panel
    pub const fn description(self) -> &'static str {
        match self {
            Shape::I => "vertical bar",
            Shape::H => "two bars, one crossbar",
            Shape::O => "filled disk",
            Shape::S => "zig-zag",
        }
    }

    /// Offsets `(d_row, d_col)` from the grid center of every live cell.
    /// May contain duplicates where strokes cross.
    pub fn offsets(self) -> Vec<(isize, isize)> {
        match self {
            Shape::I => (-5..=5).map(|dr| (dr, 0)).collect(),
            Shape::H => {
                let bars = (-5..=5).flat_map(|dr| [(dr, -2), (dr, 2)]);
                let crossbar = (-2..=2).map(|dc| (0, dc));
                bars.chain(crossbar).collect()
            }
            Shape::O => (-3isize..=3)
                .flat_map(|dr| (-3isize..=3).map(move |dc| (dr, dc)))
                .filter(|&(dr, dc)| dr * dr + dc * dc <= 10)
                .collect(),
            Shape::S => {
                // left stroke on the top half, right stroke on the bottom half
                let strokes = (-4..=4).map(|dr| if dr <= 0 { (dr, -2) } else { (dr, 2) });
                let bars = [-4, 0, 4]
                    .into_iter()
                    .flat_map(|dr| (-2..=2).map(move |dc| (dr, dc)));
                strokes.chain(bars).collect()
            }
        }
    }

    /// Write the shape centered at `(rows / 2, cols / 2)`, clipping anything off-grid.
    pub fn stamp(self, grid: &mut Grid) {
        let (center_row, center_col) = (grid.rows() / 2, grid.cols() / 2);

        for (dr, dc) in self.offsets() {
            grid.set_offset(center_row, center_col, dr, dc);
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Shape {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Shape::from_key(c).ok_or_else(|| LifeError::UnknownShape(s.to_owned())),
            _ => Err(LifeError::UnknownShape(s.to_owned())),
        }
    }
}
