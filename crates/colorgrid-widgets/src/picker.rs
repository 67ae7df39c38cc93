//! The color picker grid.

use egui::{vec2, Color32, CursorIcon, Rect, Response, Sense, Ui, Widget};

use crate::border::BorderStyle;
use crate::colors::{colors_match, to_hex};
use crate::icon::IconSet;
use crate::sizing;
use crate::symbols::{ShapeCatalog, SymbolCatalog};

/// Number of columns when none is given.
pub const DEFAULT_COLUMNS: usize = 6;

/// Ring drawn beneath a selected cell's icon.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderLayer {
    /// Stroke symbol identifier
    pub symbol: String,
    pub tint: Color32,
}

/// One cell of a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerCell {
    /// Position in the color list
    pub index: usize,
    pub row: usize,
    pub column: usize,
    pub color: Color32,
    pub selected: bool,
    /// Filled symbol identifier, tinted with `color`
    pub symbol: String,
    /// Present exactly when `selected`
    pub border: Option<BorderLayer>,
}

/// A control that selects one color out of a grid of colors.
///
/// The picker borrows the selection for the frame it is shown in; the caller
/// owns the value. Clicking a cell writes that cell's color into it.
///
/// ```no_run
/// # fn show(ui: &mut egui::Ui, colors: &[egui::Color32], selection: &mut egui::Color32) {
/// use colorgrid_widgets::{BorderStyle, ColorPicker, IconSet};
///
/// if ui
///     .add(ColorPicker::new(colors, selection).icon(IconSet::Hexagon).border(BorderStyle::Selection))
///     .changed()
/// {
///     // selection was updated this frame
/// }
/// # }
/// ```
pub struct ColorPicker<'a> {
    colors: &'a [Color32],
    selection: &'a mut Color32,
    columns: usize,
    icon: IconSet,
    border: BorderStyle,
    catalog: &'a dyn SymbolCatalog,
}

impl<'a> ColorPicker<'a> {
    /// Create a picker over `colors`, bound to `selection`.
    ///
    /// Defaults to six columns, circles, and a neutral border.
    pub fn new(colors: &'a [Color32], selection: &'a mut Color32) -> Self {
        Self {
            colors,
            selection,
            columns: DEFAULT_COLUMNS,
            icon: IconSet::default(),
            border: BorderStyle::default(),
            catalog: &ShapeCatalog,
        }
    }

    /// Set the number of grid columns. Zero is clamped to one.
    pub fn columns(mut self, columns: usize) -> Self {
        if columns == 0 {
            log::warn!("ColorPicker columns must be at least 1, using 1");
        }
        self.columns = columns.max(1);
        self
    }

    /// Set the symbol drawn for each color.
    pub fn icon(mut self, icon: IconSet) -> Self {
        self.icon = icon;
        self
    }

    /// Set how the selected cell's border is tinted.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Use a different symbol catalog.
    pub fn catalog(mut self, catalog: &'a dyn SymbolCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Current value of the bound selection.
    pub fn selection(&self) -> Color32 {
        *self.selection
    }

    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        self.colors.len().div_ceil(self.columns)
    }

    /// Compute the cells for the current colors and selection.
    ///
    /// Cells come out in list order. Every entry equal to the selection is
    /// selected, so duplicated colors highlight together.
    pub fn cells(&self) -> Vec<PickerCell> {
        let selection = *self.selection;
        let symbol = self.icon.filled();
        let border_tint = self.border.resolve_color(selection);

        self.colors
            .iter()
            .enumerate()
            .map(|(index, &color)| {
                let selected = colors_match(color, selection);
                PickerCell {
                    index,
                    row: index / self.columns,
                    column: index % self.columns,
                    color,
                    selected,
                    symbol: symbol.clone(),
                    border: selected.then(|| BorderLayer {
                        symbol: self.icon.stroke(),
                        tint: border_tint,
                    }),
                }
            })
            .collect()
    }

    /// Select the color at `index`, as a click on that cell would.
    ///
    /// Re-selecting the current color is allowed. Returns `None` when `index`
    /// is outside the color list.
    pub fn activate(&mut self, index: usize) -> Option<Color32> {
        let color = *self.colors.get(index)?;
        log::debug!("ColorPicker selected {} (cell {})", to_hex(color), index);
        *self.selection = color;
        Some(color)
    }

    /// Paint one cell into `rect`.
    fn paint_cell(&self, ui: &Ui, cell: &PickerCell, rect: Rect) {
        let painter = ui.painter();

        if let Some(border) = &cell.border {
            self.catalog.paint(painter, &border.symbol, rect, border.tint);
        }

        let icon_rect = Rect::from_center_size(rect.center(), vec2(sizing::ICON, sizing::ICON));
        self.catalog.paint(painter, &cell.symbol, icon_rect, cell.color);
    }
}

impl Widget for ColorPicker<'_> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        let cells = self.cells();
        let mut clicked = None;

        if !cells.is_empty() && !self.catalog.contains(&self.icon.filled()) {
            log::warn!("Symbol catalog has no '{}', cells will be blank", self.icon.filled());
        }

        let mut response = ui
            .vertical(|ui| {
                ui.spacing_mut().item_spacing = vec2(sizing::GRID_SPACING, sizing::GRID_SPACING);

                for row in 0..self.rows() {
                    let start = row * self.columns;
                    let end = (start + self.columns).min(cells.len());
                    ui.horizontal(|ui| {
                        for cell in &cells[start..end] {
                            let (rect, response) = ui
                                .allocate_exact_size(vec2(sizing::CELL, sizing::CELL), Sense::click());

                            if ui.is_rect_visible(rect) {
                                self.paint_cell(ui, cell, rect);
                            }

                            if response.clicked() {
                                clicked = Some(cell.index);
                            }
                            response
                                .on_hover_text(to_hex(cell.color))
                                .on_hover_cursor(CursorIcon::PointingHand);
                        }
                    });
                }
            })
            .response;

        if let Some(index) = clicked {
            self.activate(index);
            response.mark_changed();
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    const RED: Color32 = Color32::from_rgb(255, 0, 0);
    const GREEN: Color32 = Color32::from_rgb(0, 255, 0);
    const BLUE: Color32 = Color32::from_rgb(0, 0, 255);

    fn selected_indices(picker: &ColorPicker) -> Vec<usize> {
        picker
            .cells()
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.index)
            .collect()
    }

    #[test]
    fn test_cells_follow_list_order() {
        let colors: Vec<Color32> = (0..14).map(|i| Color32::from_gray(i * 10)).collect();
        let mut selection = Color32::WHITE;

        for columns in [1, 4, 6, 20] {
            let picker = ColorPicker::new(&colors, &mut selection).columns(columns);
            let cells = picker.cells();
            assert_eq!(cells.len(), colors.len());
            for (i, cell) in cells.iter().enumerate() {
                assert_eq!(cell.index, i);
                assert_eq!(cell.color, colors[i]);
                assert_eq!(cell.row * columns + cell.column, i);
                assert!(cell.column < columns);
            }
        }
    }

    #[test]
    fn test_rows() {
        let colors = [RED; 13];
        let mut selection = RED;
        assert_eq!(ColorPicker::new(&colors, &mut selection).rows(), 3);
        assert_eq!(ColorPicker::new(&colors, &mut selection).columns(13).rows(), 1);
        assert_eq!(ColorPicker::new(&[], &mut selection).rows(), 0);
    }

    #[test]
    fn test_defaults() {
        let colors = [RED];
        let mut selection = RED;
        let picker = ColorPicker::new(&colors, &mut selection);
        let cell = &picker.cells()[0];
        assert_eq!(cell.symbol, "circle.fill");
        assert_eq!(
            cell.border,
            Some(BorderLayer {
                symbol: "circle".to_string(),
                tint: theme::NEUTRAL_BORDER,
            })
        );
    }

    #[test]
    fn test_zero_columns_clamped() {
        let colors = [RED, GREEN, BLUE];
        let mut selection = RED;
        let picker = ColorPicker::new(&colors, &mut selection).columns(0);
        assert_eq!(picker.rows(), 3);
        assert!(picker.cells().iter().all(|c| c.column == 0));
    }

    #[test]
    fn test_selection_moves_on_activate() {
        let colors = [RED, GREEN, BLUE];
        let mut selection = GREEN;

        {
            let picker = ColorPicker::new(&colors, &mut selection);
            assert_eq!(selected_indices(&picker), vec![1]);
        }

        {
            let mut picker = ColorPicker::new(&colors, &mut selection);
            assert_eq!(picker.activate(2), Some(BLUE));
        }
        assert_eq!(selection, BLUE);

        let picker = ColorPicker::new(&colors, &mut selection);
        assert_eq!(selected_indices(&picker), vec![2]);
    }

    #[test]
    fn test_duplicates_all_selected() {
        let colors = [RED, RED, BLUE];
        let mut selection = RED;
        let picker = ColorPicker::new(&colors, &mut selection);
        assert_eq!(selected_indices(&picker), vec![0, 1]);
    }

    #[test]
    fn test_selection_outside_colors() {
        let colors = [RED, GREEN];
        let mut selection = BLUE;
        let picker = ColorPicker::new(&colors, &mut selection);
        assert!(picker.cells().iter().all(|c| !c.selected && c.border.is_none()));
    }

    #[test]
    fn test_reselect_is_idempotent() {
        let colors = [RED, GREEN];
        let mut selection = GREEN;
        let mut picker = ColorPicker::new(&colors, &mut selection);
        assert_eq!(picker.activate(1), Some(GREEN));
        assert_eq!(picker.selection(), GREEN);
        assert_eq!(selected_indices(&picker), vec![1]);
    }

    #[test]
    fn test_activate_out_of_range() {
        let colors = [RED];
        let mut selection = GREEN;
        let mut picker = ColorPicker::new(&colors, &mut selection);
        assert_eq!(picker.activate(1), None);
        assert_eq!(picker.selection(), GREEN);
    }

    #[test]
    fn test_border_tints() {
        let colors = [RED, GREEN];
        let mut selection = GREEN;
        let custom = Color32::from_rgb(12, 34, 56);

        let cases = [
            (BorderStyle::None, Color32::TRANSPARENT),
            (BorderStyle::Normal, theme::NEUTRAL_BORDER),
            (BorderStyle::Selection, GREEN),
            (BorderStyle::Custom(custom), custom),
        ];
        for (border, tint) in cases {
            let picker = ColorPicker::new(&colors, &mut selection)
                .icon(IconSet::Seal)
                .border(border);
            let cells = picker.cells();
            assert_eq!(cells[0].border, None);
            assert_eq!(
                cells[1].border,
                Some(BorderLayer {
                    symbol: "seal".to_string(),
                    tint,
                }),
                "{:?}",
                border
            );
        }
    }

    #[test]
    fn test_empty_colors() {
        let mut selection = RED;
        let mut picker = ColorPicker::new(&[], &mut selection);
        assert!(picker.cells().is_empty());
        assert_eq!(picker.activate(0), None);
    }

    /// Run one frame with `events` and return the picker's response.
    fn show_frame(
        ctx: &egui::Context,
        events: Vec<egui::Event>,
        colors: &[Color32],
        selection: &mut Color32,
    ) -> Response {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let mut shown = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                shown = Some(ui.add(ColorPicker::new(colors, selection).columns(2)));
            });
        });
        shown.expect("picker was not shown")
    }

    fn show_once(colors: &[Color32], selection: &mut Color32) -> Response {
        show_frame(&egui::Context::default(), Vec::new(), colors, selection)
    }

    fn primary_button(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_widget_click_writes_selection() {
        let colors = [RED, GREEN, BLUE];
        let mut selection = GREEN;
        let ctx = egui::Context::default();

        let first = show_frame(&ctx, Vec::new(), &colors, &mut selection);
        // Cell 2 sits at row 1, column 0 of a two-column grid
        let step = sizing::CELL + sizing::GRID_SPACING;
        let target = first.rect.min + vec2(sizing::CELL / 2.0, step + sizing::CELL / 2.0);

        let frames = [
            vec![egui::Event::PointerMoved(target)],
            vec![primary_button(target, true)],
            vec![primary_button(target, false)],
        ];
        let mut changed = false;
        for events in frames {
            changed |= show_frame(&ctx, events, &colors, &mut selection).changed();
        }

        assert!(changed);
        assert_eq!(selection, BLUE);

        let picker = ColorPicker::new(&colors, &mut selection);
        assert_eq!(selected_indices(&picker), vec![2]);
    }

    #[test]
    fn test_widget_click_outside_cells() {
        let colors = [RED, GREEN, BLUE];
        let mut selection = GREEN;
        let ctx = egui::Context::default();

        let first = show_frame(&ctx, Vec::new(), &colors, &mut selection);
        // Empty slot right of cell 2
        let step = sizing::CELL + sizing::GRID_SPACING;
        let target = first.rect.min + vec2(step + sizing::CELL / 2.0, step + sizing::CELL / 2.0);

        let frames = [
            vec![egui::Event::PointerMoved(target)],
            vec![primary_button(target, true)],
            vec![primary_button(target, false)],
        ];
        let mut changed = false;
        for events in frames {
            changed |= show_frame(&ctx, events, &colors, &mut selection).changed();
        }

        assert!(!changed);
        assert_eq!(selection, GREEN);
    }

    struct EmptyCatalog;

    impl SymbolCatalog for EmptyCatalog {
        fn contains(&self, _name: &str) -> bool {
            false
        }

        fn paint(&self, _painter: &egui::Painter, _name: &str, _rect: Rect, _tint: Color32) -> bool {
            false
        }
    }

    #[test]
    fn test_widget_with_missing_symbols() {
        let colors = [RED, GREEN];
        let mut selection = RED;
        let ctx = egui::Context::default();
        let mut shown = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                shown = Some(ui.add(ColorPicker::new(&colors, &mut selection).catalog(&EmptyCatalog)));
            });
        });
        let response = shown.expect("picker was not shown");
        assert!((response.rect.height() - sizing::CELL).abs() < 0.5, "{:?}", response.rect);
        assert_eq!(selection, RED);
    }

    #[test]
    fn test_widget_empty_grid() {
        let mut selection = RED;
        let response = show_once(&[], &mut selection);
        assert!(!response.changed());
        assert_eq!(selection, RED);
    }

    #[test]
    fn test_widget_lays_out_rows() {
        let colors = [RED, GREEN, BLUE];
        let mut selection = GREEN;
        let response = show_once(&colors, &mut selection);

        // Two rows of at most two cells
        let width = 2.0 * sizing::CELL + sizing::GRID_SPACING;
        let height = 2.0 * sizing::CELL + sizing::GRID_SPACING;
        assert!((response.rect.width() - width).abs() < 0.5, "{:?}", response.rect);
        assert!((response.rect.height() - height).abs() < 0.5, "{:?}", response.rect);
        assert!(!response.changed());
        assert_eq!(selection, GREEN);
    }
}
