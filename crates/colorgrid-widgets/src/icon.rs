//! Symbol shapes a picker can draw for each color.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Suffix appended to a symbol name to select its solid rendering.
pub const FILL_SUFFIX: &str = ".fill";

/// The shape drawn for every color in a picker.
///
/// Each tag names two symbols in a [`SymbolCatalog`](crate::SymbolCatalog):
/// a filled one used for the swatch and a stroke one used for the selection border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconSet {
    #[default]
    Circle,
    Square,
    Diamond,
    Octagon,
    Hexagon,
    Seal,
}

impl IconSet {
    /// All icons, in declaration order.
    pub const ALL: [IconSet; 6] = [
        IconSet::Circle,
        IconSet::Square,
        IconSet::Diamond,
        IconSet::Octagon,
        IconSet::Hexagon,
        IconSet::Seal,
    ];

    /// Lowercase tag name.
    pub fn name(self) -> &'static str {
        match self {
            IconSet::Circle => "circle",
            IconSet::Square => "square",
            IconSet::Diamond => "diamond",
            IconSet::Octagon => "octagon",
            IconSet::Hexagon => "hexagon",
            IconSet::Seal => "seal",
        }
    }

    /// Symbol identifier for the solid rendering, e.g. `circle.fill`.
    pub fn filled(self) -> String {
        format!("{}{}", self.name(), FILL_SUFFIX)
    }

    /// Symbol identifier for the outline rendering, e.g. `circle`.
    pub fn stroke(self) -> String {
        self.name().to_string()
    }
}

impl fmt::Display for IconSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name any [`IconSet`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown icon: {0}")]
pub struct UnknownIcon(pub String);

impl FromStr for IconSet {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        IconSet::ALL
            .into_iter()
            .find(|icon| icon.name() == lower)
            .ok_or_else(|| UnknownIcon(s.to_string()))
    }
}
