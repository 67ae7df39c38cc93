//! Border tint strategies for the selected cell.

use std::str::FromStr;

use egui::Color32;
use thiserror::Error;

use crate::colors::{parse_hex_color, ColorParseError};
use crate::theme;

/// How the border around the selected color is tinted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// No visible border (transparent tint).
    None,
    /// Neutral gray border.
    #[default]
    Normal,
    /// Border in the currently selected color.
    Selection,
    /// Border in a fixed caller-supplied color.
    Custom(Color32),
}

impl BorderStyle {
    /// All styles that carry no color, in declaration order.
    pub const PRESETS: [BorderStyle; 3] =
        [BorderStyle::None, BorderStyle::Normal, BorderStyle::Selection];

    /// Resolve the border tint for the current selection.
    pub fn resolve_color(self, selection: Color32) -> Color32 {
        match self {
            BorderStyle::None => Color32::TRANSPARENT,
            BorderStyle::Normal => theme::NEUTRAL_BORDER,
            BorderStyle::Selection => selection,
            BorderStyle::Custom(color) => color,
        }
    }

    /// Get display name for this border style.
    pub fn name(self) -> &'static str {
        match self {
            BorderStyle::None => "None",
            BorderStyle::Normal => "Normal",
            BorderStyle::Selection => "Selection",
            BorderStyle::Custom(_) => "Custom",
        }
    }
}

/// Returned when a string is neither a border name nor a hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BorderParseError {
    #[error("Unknown border style: {0}")]
    Unknown(String),
    #[error("Invalid custom border color: {0}")]
    Color(#[from] ColorParseError),
}

impl FromStr for BorderStyle {
    type Err = BorderParseError;

    /// Accepts `none`, `normal`, `selection`, or a hex color for [`BorderStyle::Custom`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with('#') {
            return Ok(BorderStyle::Custom(parse_hex_color(trimmed)?));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "none" => Ok(BorderStyle::None),
            "normal" => Ok(BorderStyle::Normal),
            "selection" => Ok(BorderStyle::Selection),
            _ => Err(BorderParseError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SELECTIONS: [Color32; 4] = [
        Color32::RED,
        Color32::TRANSPARENT,
        Color32::from_rgb(88, 86, 214),
        Color32::from_rgba_premultiplied(10, 20, 30, 40),
    ];

    #[test]
    fn test_default_is_normal() {
        assert_eq!(BorderStyle::default(), BorderStyle::Normal);
    }

    #[test]
    fn test_none_is_transparent() {
        for selection in SELECTIONS {
            assert_eq!(BorderStyle::None.resolve_color(selection), Color32::TRANSPARENT);
        }
    }

    #[test]
    fn test_normal_is_neutral_gray() {
        for selection in SELECTIONS {
            assert_eq!(
                BorderStyle::Normal.resolve_color(selection),
                theme::NEUTRAL_BORDER
            );
        }
    }

    #[test]
    fn test_selection_is_identity() {
        for selection in SELECTIONS {
            assert_eq!(BorderStyle::Selection.resolve_color(selection), selection);
        }
    }

    #[test]
    fn test_custom_ignores_selection() {
        let custom = Color32::from_rgb(1, 2, 3);
        for selection in SELECTIONS {
            assert_eq!(BorderStyle::Custom(custom).resolve_color(selection), custom);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("none".parse(), Ok(BorderStyle::None));
        assert_eq!("Normal".parse(), Ok(BorderStyle::Normal));
        assert_eq!("SELECTION".parse(), Ok(BorderStyle::Selection));
        assert_eq!(
            "#000000".parse(),
            Ok(BorderStyle::Custom(Color32::BLACK))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "thick".parse::<BorderStyle>(),
            Err(BorderParseError::Unknown("thick".to_string()))
        );
        assert!(matches!(
            "#12".parse::<BorderStyle>(),
            Err(BorderParseError::Color(ColorParseError::InvalidLength(_)))
        ));
    }
}
