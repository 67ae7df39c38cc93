//! Palette configuration loaded from JSON.

use std::path::{Path, PathBuf};

use colorgrid_widgets::{
    parse_hex_color, BorderParseError, BorderStyle, ColorParseError, IconSet, UnknownIcon,
    DEFAULT_COLUMNS, SYSTEM_COLORS,
};
use egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Color #{index} is invalid: {source}")]
    Color {
        index: usize,
        source: ColorParseError,
    },
    #[error("Selection is invalid: {0}")]
    Selection(ColorParseError),
    #[error(transparent)]
    Icon(#[from] UnknownIcon),
    #[error(transparent)]
    Border(#[from] BorderParseError),
    #[error("Columns must be at least 1")]
    ZeroColumns,
}

/// Palette as written in the config file. Colors are hex strings.
///
/// ```json
/// { "colors": ["#ff3b30", "#34c759"], "columns": 4, "icon": "hexagon", "border": "selection" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub colors: Vec<String>,
    pub columns: usize,
    pub icon: String,
    /// `none`, `normal`, `selection`, or a hex color
    pub border: String,
    /// Initial selection; the first color when absent
    pub selection: Option<String>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: SYSTEM_COLORS
                .iter()
                .map(|c| colorgrid_widgets::to_hex(c.color))
                .collect(),
            columns: DEFAULT_COLUMNS,
            icon: IconSet::default().to_string(),
            border: BorderStyle::default().name().to_lowercase(),
            selection: None,
        }
    }
}

/// A validated palette, ready to hand to the pickers.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub colors: Vec<Color32>,
    pub columns: usize,
    pub icon: IconSet,
    pub border: BorderStyle,
    pub selection: Color32,
}

impl PaletteConfig {
    /// Load a palette config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded palette config from {:?} ({} colors)", path, config.colors.len());
        Ok(config)
    }

    /// Parse a palette config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check every field and convert it to its typed value.
    pub fn validate(&self) -> Result<Palette, ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }

        let colors = self
            .colors
            .iter()
            .enumerate()
            .map(|(index, hex)| {
                parse_hex_color(hex).map_err(|source| ConfigError::Color { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let selection = match &self.selection {
            Some(hex) => parse_hex_color(hex).map_err(ConfigError::Selection)?,
            None => colors.first().copied().unwrap_or(Color32::TRANSPARENT),
        };

        Ok(Palette {
            columns: self.columns,
            icon: self.icon.parse()?,
            border: self.border.parse()?,
            selection,
            colors,
        })
    }
}
