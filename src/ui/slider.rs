use macroquad::prelude::*;

const TRACK_HEIGHT: f32 = 6.0;
const HANDLE_WIDTH: f32 = 10.0;
const HANDLE_HEIGHT: f32 = 20.0;

/// Horizontal integer slider, dragged with the left mouse button
#[derive(Clone)]
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    min: u32,
    max: u32,
    value: u32,
    dragging: bool,
    label: String,
}

impl Slider {
    pub fn new(x: f32, y: f32, width: f32, min: u32, max: u32, value: u32, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            min,
            max,
            value: value.clamp(min, max),
            dragging: false,
            label: label.into(),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Value under horizontal mouse position `mouse_x`, clamped to the track
    pub fn value_at(&self, mouse_x: f32) -> u32 {
        let t = ((mouse_x - self.x) / self.width).clamp(0.0, 1.0);
        self.min + (t * (self.max - self.min) as f32).round() as u32
    }

    fn handle_x(&self) -> f32 {
        let span = (self.max - self.min).max(1) as f32;
        self.x + (self.value - self.min) as f32 / span * self.width
    }

    /// Anywhere on the track or the handle grabs the slider
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x - HANDLE_WIDTH / 2.0
            && mouse_pos.0 <= self.x + self.width + HANDLE_WIDTH / 2.0
            && mouse_pos.1 >= self.y - HANDLE_HEIGHT / 2.0
            && mouse_pos.1 <= self.y + HANDLE_HEIGHT / 2.0
    }

    /// Feed pointer state; returns the new value when it changed
    pub fn update(&mut self, mouse_pos: (f32, f32), pressed: bool, down: bool) -> Option<u32> {
        if pressed && self.is_hovered(mouse_pos) {
            self.dragging = true;
        }
        if !down {
            self.dragging = false;
        }
        if !self.dragging {
            return None;
        }

        let value = self.value_at(mouse_pos.0);
        (value != self.value).then(|| {
            self.value = value;
            value
        })
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(
            &format!("{} {}%", self.label, self.value),
            self.x,
            self.y - HANDLE_HEIGHT,
            16.0,
            WHITE,
        );

        draw_rectangle(
            self.x,
            self.y - TRACK_HEIGHT / 2.0,
            self.width,
            TRACK_HEIGHT,
            Color::from_rgba(60, 60, 60, 255),
        );

        let handle_color = if self.dragging || self.is_hovered(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        let hx = self.handle_x() - HANDLE_WIDTH / 2.0;
        let hy = self.y - HANDLE_HEIGHT / 2.0;
        draw_rectangle(hx, hy, HANDLE_WIDTH, HANDLE_HEIGHT, handle_color);
        draw_rectangle_lines(hx, hy, HANDLE_WIDTH, HANDLE_HEIGHT, 1.0, WHITE);
    }
}
