use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::columns::FlightField;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Flight table (central panel)
// ---------------------------------------------------------------------------

/// Render the visible flights, one row per record.
pub fn flight_table(ui: &mut Ui, state: &AppState) {
    if state.records.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Upload a workbook to preview flights  (File → Open workbook…)");
        });
        return;
    }
    if state.visible_indices.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No flights match the current filters.");
        });
        return;
    }

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .min_scrolled_height(0.0);
    for _ in 0..FlightField::ALL.len() - 1 {
        table = table.column(Column::auto().at_least(60.0));
    }
    table = table.column(Column::remainder());

    table
        .header(ROW_HEIGHT, |mut header| {
            for field in FlightField::ALL {
                header.col(|ui| {
                    ui.strong(field.label());
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, state.visible_indices.len(), |mut row| {
                let record = &state.records[state.visible_indices[row.index()]];
                for field in FlightField::ALL {
                    let value = field.get(record);
                    row.col(|ui| {
                        if field == FlightField::Status {
                            let color = state.status_colors.color_for(value);
                            ui.label(RichText::new(value).color(color).strong());
                        } else {
                            ui.label(value);
                        }
                    });
                }
            });
        });
}
