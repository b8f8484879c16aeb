mod button;
mod palette;
mod slider;

pub use button::Button;
pub use palette::Palette;
pub use slider::Slider;

use macroquad::color::Color;

use crate::config::Config;
use crate::domain::AreaPercent;
use crate::input::Command;

pub const PANEL_WIDTH: f32 = 180.0;
pub const PANEL_PADDING: f32 = 20.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
const BUTTON_SPACING: f32 = 50.0;
const MIN_WINDOW_HEIGHT: f32 = 640.0;
const STATUS_BAR_HEIGHT: f32 = 30.0;

/// Label shown next to the random area size slider
pub const AREA_SIZE_LABEL: &str = "Random Area Size";

/// Where everything sits in the window: the grid surface on the left, the
/// control panel on the right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub surface_width: f32,
    pub surface_height: f32,
}

impl Layout {
    pub fn new(config: &Config) -> Self {
        Self {
            surface_width: config.surface.width as f32,
            surface_height: config.surface.height as f32,
        }
    }

    /// X position where the panel content starts
    pub fn panel_x(&self) -> f32 {
        self.surface_width + PANEL_PADDING
    }

    pub fn window_width(&self) -> f32 {
        self.surface_width + PANEL_WIDTH + 2.0 * PANEL_PADDING
    }

    pub fn window_height(&self) -> f32 {
        (self.surface_height + STATUS_BAR_HEIGHT).max(MIN_WINDOW_HEIGHT)
    }

    /// Baseline of the status message, in the strip under the grid
    pub fn status_y(&self) -> f32 {
        self.surface_height + STATUS_BAR_HEIGHT - 10.0
    }

    pub fn buttons_y(&self) -> f32 {
        20.0
    }

    pub fn slider_y(&self) -> f32 {
        self.buttons_y() + 5.0 * BUTTON_SPACING + 40.0
    }

    pub fn palette_y(&self) -> f32 {
        self.slider_y() + 50.0
    }
}

/// Create the command buttons. Clear stops the simulation first.
pub fn create_buttons(layout: &Layout) -> Vec<Button> {
    let buttons: [(&str, &'static [Command]); 5] = [
        ("Start", &[Command::Start]),
        ("Stop", &[Command::Stop]),
        ("Clear", &[Command::Stop, Command::Clear]),
        ("Random", &[Command::Randomize]),
        ("Toggle Grid", &[Command::ToggleGridLines]),
    ];

    let px = layout.panel_x();
    buttons
        .into_iter()
        .enumerate()
        .map(|(i, (text, commands))| {
            let y = layout.buttons_y() + i as f32 * BUTTON_SPACING;
            Button::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT, text, commands)
        })
        .collect()
}

/// All interactive widgets of the control panel
#[derive(Clone)]
pub struct Controls {
    pub buttons: Vec<Button>,
    pub slider: Slider,
    pub palette: Palette,
}

impl Controls {
    pub fn new(layout: &Layout, area: AreaPercent, fill_color: Color) -> Self {
        let px = layout.panel_x();

        Self {
            buttons: create_buttons(layout),
            slider: Slider::new(
                px,
                layout.slider_y(),
                PANEL_WIDTH,
                AreaPercent::MIN,
                AreaPercent::MAX,
                area.get(),
                AREA_SIZE_LABEL,
            ),
            palette: Palette::new(px, layout.palette_y(), fill_color),
        }
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        self.buttons.iter().for_each(|btn| btn.draw(mouse_pos));
        self.slider.draw(mouse_pos);
        self.palette.draw(mouse_pos);
    }
}
