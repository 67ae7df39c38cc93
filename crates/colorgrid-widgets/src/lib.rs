//! Color picker grid widget for egui.
//!
//! This crate provides a single reusable control and the pieces it is built from:
//!
//! - **Icon**: the symbol shapes a picker can draw, in filled and stroke variants
//! - **Border**: how the ring around the selected color is tinted
//! - **Symbols**: the catalog that turns symbol identifiers into painted shapes
//! - **Picker**: the grid itself, bound to a caller-owned selection
//! - **Colors**: color comparison, hex parsing, and the default palette
//!
//! ```no_run
//! # fn show(ui: &mut egui::Ui) {
//! use colorgrid_widgets::{BorderStyle, ColorPicker, IconSet, SYSTEM_COLORS};
//!
//! let colors: Vec<egui::Color32> = SYSTEM_COLORS.iter().map(|c| c.color).collect();
//! let mut selection = colors[0];
//!
//! ui.add(
//!     ColorPicker::new(&colors, &mut selection)
//!         .columns(6)
//!         .icon(IconSet::Circle)
//!         .border(BorderStyle::Normal),
//! );
//! # }
//! ```

pub mod border;
pub mod colors;
pub mod icon;
pub mod picker;
pub mod symbols;

pub use border::{BorderParseError, BorderStyle};
pub use colors::{colors_match, parse_hex_color, to_hex, ColorParseError, NamedColor, SYSTEM_COLORS};
pub use icon::{IconSet, UnknownIcon, FILL_SUFFIX};
pub use picker::{BorderLayer, ColorPicker, PickerCell, DEFAULT_COLUMNS};
pub use symbols::{ShapeCatalog, SymbolCatalog};

/// Standard sizing constants used by the picker.
pub mod sizing {
    /// Side of the box each filled icon is drawn in.
    pub const ICON: f32 = 32.0;
    /// Side of a grid cell. Also the tap target and the border symbol's box.
    pub const CELL: f32 = 48.0;
    /// Gap between cells, both horizontally and vertically.
    pub const GRID_SPACING: f32 = 16.0;
    /// Width of the stroke used for outline symbols.
    pub const STROKE_WIDTH: f32 = 2.5;
}

/// Standard colors used by the widgets.
pub mod theme {
    use egui::Color32;

    /// Neutral border for the selected cell (tertiary system gray).
    pub const NEUTRAL_BORDER: Color32 = Color32::from_rgb(199, 199, 204);
}
