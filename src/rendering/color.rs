use macroquad::color::Color;

use crate::error::LifeError;

/// Where the live-cell fill color is read from at draw time
pub trait ColorSource {
    fn fill_color(&self) -> Color;
}

impl ColorSource for Color {
    fn fill_color(&self) -> Color {
        *self
    }
}

/// Parse a `#rrggbb` color, as produced by an HTML color input
pub fn parse_hex_color(s: &str) -> Result<Color, LifeError> {
    let invalid = || LifeError::InvalidColor(s.to_owned());

    let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
    let [_, r, g, b] = value.to_be_bytes();

    Ok(Color::from_rgba(r, g, b, 255))
}
