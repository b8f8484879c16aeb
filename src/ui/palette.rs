use macroquad::prelude::*;

use crate::rendering::ColorSource;

pub const SWATCH_SIZE: f32 = 20.0;
const SWATCH_GAP: f32 = 4.0;
const SWATCHES_PER_ROW: usize = 6;

/// Color picker: a small grid of swatches, one of which is selected
#[derive(Clone)]
pub struct Palette {
    x: f32,
    y: f32,
    colors: Vec<Color>,
    selected: usize,
}

impl Palette {
    /// Default swatches, with `initial` selected. Added in front if not already present.
    pub fn new(x: f32, y: f32, initial: Color) -> Self {
        let mut colors = vec![
            BLACK,
            Color::from_rgba(0, 160, 90, 255),
            Color::from_rgba(30, 90, 200, 255),
            Color::from_rgba(200, 40, 40, 255),
            Color::from_rgba(230, 140, 0, 255),
            Color::from_rgba(140, 60, 190, 255),
            Color::from_rgba(0, 170, 190, 255),
            Color::from_rgba(230, 60, 140, 255),
            Color::from_rgba(120, 120, 120, 255),
            Color::from_rgba(110, 70, 30, 255),
            Color::from_rgba(90, 140, 0, 255),
            Color::from_rgba(20, 40, 90, 255),
        ];

        let selected = match colors.iter().position(|&c| c == initial) {
            Some(idx) => idx,
            None => {
                colors.insert(0, initial);
                0
            }
        };

        Self {
            x,
            y,
            colors,
            selected,
        }
    }

    pub fn selected(&self) -> Color {
        self.colors[self.selected]
    }

    /// Total height taken by the swatches
    pub fn height(&self) -> f32 {
        let rows = self.colors.len().div_ceil(SWATCHES_PER_ROW);
        rows as f32 * (SWATCH_SIZE + SWATCH_GAP)
    }

    fn swatch_origin(&self, index: usize) -> (f32, f32) {
        let (row, col) = (index / SWATCHES_PER_ROW, index % SWATCHES_PER_ROW);
        (
            self.x + col as f32 * (SWATCH_SIZE + SWATCH_GAP),
            self.y + row as f32 * (SWATCH_SIZE + SWATCH_GAP),
        )
    }

    fn swatch_at(&self, mouse_pos: (f32, f32)) -> Option<usize> {
        (0..self.colors.len()).find(|&i| {
            let (sx, sy) = self.swatch_origin(i);
            mouse_pos.0 >= sx
                && mouse_pos.0 <= sx + SWATCH_SIZE
                && mouse_pos.1 >= sy
                && mouse_pos.1 <= sy + SWATCH_SIZE
        })
    }

    /// Select the swatch under a click; returns true if the selection changed
    pub fn click(&mut self, mouse_pos: (f32, f32)) -> bool {
        match self.swatch_at(mouse_pos) {
            Some(idx) if idx != self.selected => {
                self.selected = idx;
                true
            }
            _ => false,
        }
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let hovered = self.swatch_at(mouse_pos);

        for (i, &color) in self.colors.iter().enumerate() {
            let (sx, sy) = self.swatch_origin(i);
            draw_rectangle(sx, sy, SWATCH_SIZE, SWATCH_SIZE, color);

            let (thickness, outline) = if i == self.selected {
                (3.0, WHITE)
            } else if hovered == Some(i) {
                (2.0, LIGHTGRAY)
            } else {
                (1.0, Color::from_rgba(80, 80, 80, 255))
            };
            draw_rectangle_lines(sx, sy, SWATCH_SIZE, SWATCH_SIZE, thickness, outline);
        }
    }
}

impl ColorSource for Palette {
    fn fill_color(&self) -> Color {
        self.selected()
    }
}
