use macroquad::color::Color;
use macroquad::shapes::{draw_line, draw_rectangle};

/// Something the grid can be painted onto.
///
/// Coordinates are surface-relative pixels with the origin top-left.
pub trait Surface {
    /// `(width, height)` in pixels
    fn size(&self) -> (f32, f32);

    /// Wipe the whole surface
    fn clear(&mut self);

    fn line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Color);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Line {
        from: (f32, f32),
        to: (f32, f32),
        thickness: f32,
        color: Color,
    },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
}

/// Headless surface that records what was drawn since the last clear.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Everything currently on the surface, oldest first
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn filled_rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
    }

    /// Top-left corners of every filled rectangle, converted back to `(row, col)`
    pub fn filled_cells(&self, cell_size: f32) -> Vec<(usize, usize)> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::FillRect { x, y, .. } => {
                    Some(((y / cell_size) as usize, (x / cell_size) as usize))
                }
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Color) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            thickness,
            color,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }
}

/// A rectangle of the macroquad window, offset from the window origin.
pub struct MacroquadSurface {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    background: Color,
}

impl MacroquadSurface {
    pub fn new(x: f32, y: f32, width: f32, height: f32, background: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            background,
        }
    }

    /// Convert window coordinates to surface coordinates, if they fall on the surface
    pub fn to_local(&self, window_x: f32, window_y: f32) -> Option<(f32, f32)> {
        let (x, y) = (window_x - self.x, window_y - self.y);
        (x >= 0.0 && y >= 0.0 && x < self.width && y < self.height).then_some((x, y))
    }
}

impl Surface for MacroquadSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        draw_rectangle(self.x, self.y, self.width, self.height, self.background);
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Color) {
        draw_line(
            self.x + from.0,
            self.y + from.1,
            self.x + to.0,
            self.y + to.1,
            thickness,
            color,
        );
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        draw_rectangle(self.x + x, self.y + y, width, height, color);
    }
}

#[cfg(test)]
mod tests {
    use macroquad::color::{BLACK, RED};

    use super::*;

    #[test]
    fn test_clear_discards_previous_frame() {
        let mut surface = RecordingSurface::new(100.0, 100.0);

        surface.fill_rect(0.0, 0.0, 10.0, 10.0, RED);
        surface.clear();
        surface.line((0.0, 0.0), (100.0, 0.0), 0.5, BLACK);

        assert_eq!(surface.commands().len(), 2);
        assert_eq!(surface.commands()[0], DrawCommand::Clear);
        assert_eq!(surface.filled_rects().count(), 0);
        assert_eq!(surface.lines().count(), 1);
    }

    #[test]
    fn test_filled_cells() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        surface.fill_rect(30.0, 70.0, 10.0, 10.0, RED);

        assert_eq!(surface.filled_cells(10.0), vec![(7, 3)]);
    }

    #[test]
    fn test_to_local() {
        let surface = MacroquadSurface::new(10.0, 20.0, 100.0, 50.0, BLACK);

        assert_eq!(surface.to_local(15.0, 25.0), Some((5.0, 5.0)));
        assert_eq!(surface.to_local(5.0, 25.0), None);
        assert_eq!(surface.to_local(110.0, 25.0), None);
        assert_eq!(surface.to_local(15.0, 70.0), None);
    }
}
