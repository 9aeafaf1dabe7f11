use eframe::egui::{self, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Summary tiles above the table
// ---------------------------------------------------------------------------

/// Four headline numbers for the current upload.
pub fn summary_tiles(ui: &mut Ui, state: &AppState) {
    let distinct_statuses = state.status_options.len().saturating_sub(1);
    let tiles = [
        ("Flights loaded", state.records.len().to_string()),
        ("Showing", state.visible_indices.len().to_string()),
        ("Statuses", distinct_statuses.to_string()),
        ("Airlines", state.airline_count().to_string()),
    ];

    ui.columns(tiles.len(), |columns| {
        for (col, (title, value)) in columns.iter_mut().zip(tiles) {
            egui::Frame::group(col.style()).show(col, |ui: &mut Ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new(title).weak());
                ui.label(RichText::new(value).heading().strong());
            });
        }
    });
}
