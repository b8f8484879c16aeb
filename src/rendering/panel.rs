use macroquad::prelude::*;

use crate::application::{Engine, StatusLine};
use crate::domain::Shape;
use crate::ui::{Controls, Layout, PANEL_PADDING, PANEL_WIDTH};

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel: widgets, run state, counters and the latest status message
pub fn draw_controls(
    engine: &Engine<StatusLine>,
    controls: &Controls,
    layout: &Layout,
    mouse_pos: (f32, f32),
) {
    draw_rectangle(
        layout.surface_width,
        0.0,
        PANEL_WIDTH + 2.0 * PANEL_PADDING,
        layout.window_height(),
        Color::from_rgba(30, 30, 30, 255),
    );

    controls.draw(mouse_pos);

    let px = layout.panel_x();
    let mut y = layout.palette_y() + controls.palette.height() + 30.0;

    let (rows, cols) = engine.grid().dimensions();
    let state_color = if engine.is_running() {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let labels = [
        (
            (if engine.is_running() { "Running" } else { "Stopped" }).to_string(),
            16.0,
            state_color,
        ),
        (format!("Generation: {}", engine.generation()), 14.0, WHITE),
        (format!("Population: {}", engine.grid().population()), 14.0, WHITE),
        (format!("Grid: {rows}x{cols}"), 12.0, GRAY),
        (String::new(), 12.0, GRAY),
        ("Click: toggle cell".to_string(), 12.0, GRAY),
    ];
    let shape_help = Shape::all()
        .map(|shape| (format!("{}: {}", shape.letter(), shape.description()), 12.0, GRAY));

    for (text, size, color) in labels.iter().chain(&shape_help) {
        draw_text_label(text, px, y, *size, *color);
        y += size + 6.0;
    }

    if let Some(message) = engine.status().latest() {
        draw_text_label(message, 10.0, layout.status_y(), 16.0, LIGHTGRAY);
    }
}
