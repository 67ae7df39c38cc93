//! Color helpers: selection matching, hex parsing, and the default palette.

use egui::Color32;
use thiserror::Error;

/// Errors from [`parse_hex_color`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("Color must start with '#': {0}")]
    MissingHash(String),
    #[error("Color must have 6 or 8 hex digits: {0}")]
    InvalidLength(String),
    #[error("Invalid hex digit in color: {0}")]
    InvalidDigit(String),
}

/// A color with a display name.
#[derive(Debug, Clone, Copy)]
pub struct NamedColor {
    /// Color name (e.g., "Red", "Indigo")
    pub name: &'static str,
    pub color: Color32,
}

impl NamedColor {
    /// Create a named opaque color from RGB components.
    pub const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            color: Color32::from_rgb(r, g, b),
        }
    }
}

/// The default palette: the light-mode system colors.
pub const SYSTEM_COLORS: &[NamedColor] = &[
    NamedColor::new("Red", 255, 59, 48),
    NamedColor::new("Orange", 255, 149, 0),
    NamedColor::new("Yellow", 255, 204, 0),
    NamedColor::new("Green", 52, 199, 89),
    NamedColor::new("Blue", 0, 122, 255),
    NamedColor::new("Indigo", 88, 86, 214),
    NamedColor::new("Purple", 175, 82, 222),
    NamedColor::new("Pink", 255, 45, 85),
    NamedColor::new("Brown", 162, 132, 94),
];

/// Check if two colors are the same value (for selection highlighting).
///
/// All four channels take part, so a translucent red never matches an opaque one.
pub fn colors_match(a: Color32, b: Color32) -> bool {
    a.to_array() == b.to_array()
}

/// Parse a `#rrggbb` or `#rrggbbaa` string into an unmultiplied color.
pub fn parse_hex_color(color: &str) -> Result<Color32, ColorParseError> {
    let trimmed = color.trim();
    let digits = trimmed
        .strip_prefix('#')
        .ok_or_else(|| ColorParseError::MissingHash(color.to_string()))?;

    if digits.len() != 6 && digits.len() != 8 {
        return Err(ColorParseError::InvalidLength(color.to_string()));
    }
    // from_str_radix alone would accept a leading '+'
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidDigit(color.to_string()));
    }

    let channel = |i: usize| {
        digits
            .get(i..i + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(|| ColorParseError::InvalidDigit(color.to_string()))
    };

    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    if digits.len() == 8 {
        Ok(Color32::from_rgba_unmultiplied(r, g, b, channel(6)?))
    } else {
        Ok(Color32::from_rgb(r, g, b))
    }
}

/// Format a color as `#rrggbb`, or `#rrggbbaa` when it is not opaque.
pub fn to_hex(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == u8::MAX {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}
