//! Colorgrid demo application
//!
//! A native window that mounts several color pickers sharing one selection,
//! with the palette loaded from a JSON config.

mod app;
mod config;
mod ui;

pub use app::{App, AppConfig, AppError};
pub use config::{ConfigError, Palette, PaletteConfig};
pub use ui::{render_ui, UiState};
