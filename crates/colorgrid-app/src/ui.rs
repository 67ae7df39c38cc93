//! Demo UI: every icon and border style, all bound to one selection.

use colorgrid_widgets::{sizing, to_hex, BorderStyle, ColorPicker, IconSet};
use egui::{vec2, Color32, Context, CornerRadius, Frame, Margin, RichText, Sense, Stroke, Ui};

use crate::config::Palette;

/// Muted caption color for symbol names.
const CAPTION: Color32 = Color32::from_rgb(142, 142, 147);

/// State owned by the demo across frames.
#[derive(Debug, Clone)]
pub struct UiState {
    pub palette: Palette,
    /// The one selection every picker is bound to.
    pub selection: Color32,
    /// Window background behind the cards.
    pub background: Color32,
}

impl UiState {
    /// Start from the palette's initial selection.
    pub fn new(palette: Palette) -> Self {
        Self {
            selection: palette.selection,
            palette,
            background: Color32::from_rgb(242, 242, 247),
        }
    }

    /// Set the window background.
    pub fn with_background(mut self, background: Color32) -> Self {
        self.background = background;
        self
    }

    /// Border styles to demo: the presets plus the configured custom color, if any.
    fn border_styles(&self) -> Vec<BorderStyle> {
        let mut styles = BorderStyle::PRESETS.to_vec();
        match self.palette.border {
            BorderStyle::Custom(color) => styles.push(BorderStyle::Custom(color)),
            _ => styles.push(BorderStyle::Custom(Color32::from_gray(30))),
        }
        styles
    }
}

/// Render the demo UI. Returns true when the selection changed this frame.
pub fn render_ui(ctx: &Context, state: &mut UiState) -> bool {
    let mut changed = false;

    egui::CentralPanel::default()
        .frame(Frame::new().fill(state.background).inner_margin(Margin::same(16)))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                selection_preview(ui, state.selection);
                ui.add_space(16.0);

                ui.heading("Icons");
                card().show(ui, |ui| {
                    for icon in IconSet::ALL {
                        let border = state.palette.border;
                        changed |= picker_section(ui, state, icon, border);
                    }
                });
                ui.add_space(16.0);

                ui.heading("Borders");
                card().show(ui, |ui| {
                    for border in state.border_styles() {
                        let icon = state.palette.icon;
                        changed |= picker_section(ui, state, icon, border);
                    }
                });
            });
        });

    if changed {
        log::info!("Selection changed to {}", to_hex(state.selection));
    }
    changed
}

/// White rounded card grouping a set of pickers.
fn card() -> Frame {
    Frame::new()
        .fill(Color32::WHITE)
        .corner_radius(CornerRadius::same(10))
        .stroke(Stroke::new(1.0, Color32::from_gray(225)))
        .inner_margin(Margin::same(12))
}

/// One picker with a caption naming its border style and symbols.
fn picker_section(ui: &mut Ui, state: &mut UiState, icon: IconSet, border: BorderStyle) -> bool {
    ui.horizontal(|ui| {
        ui.label(RichText::new(border.name()).strong());
        ui.label(
            RichText::new(format!("{} / {}", icon.filled(), icon.stroke()))
                .size(11.0)
                .color(CAPTION),
        );
    });
    let response = ui.add(
        ColorPicker::new(&state.palette.colors, &mut state.selection)
            .columns(state.palette.columns)
            .icon(icon)
            .border(border),
    );
    ui.add_space(12.0);
    response.changed()
}

/// Swatch and hex code of the current selection.
fn selection_preview(ui: &mut Ui, selection: Color32) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(vec2(sizing::ICON, sizing::ICON), Sense::hover());
        ui.painter().rect_filled(rect, 6.0, selection);
        ui.label(format!("Selected {}", to_hex(selection)));
    });
}
