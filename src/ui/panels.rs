use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, Notice};
use crate::upload::Uploader;

/// Extensions offered by the file picker. The decoder itself sniffs content.
pub const WORKBOOK_EXTENSIONS: [&str; 3] = ["xls", "xlsx", "xlsm"];

const WARNING_COLOR: Color32 = Color32::from_rgb(230, 160, 30);

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, uploader: &mut Uploader) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open workbook…").clicked() {
                open_file_dialog(ui.ctx(), state, uploader);
                ui.close_menu();
            }
        });

        ui.separator();

        if ui.button("Clear filters").clicked() {
            state.clear_filters();
        }

        ui.separator();

        ui.label(format!(
            "{} flights loaded, {} visible",
            state.records.len(),
            state.visible_indices.len()
        ));

        if let Some(name) = &state.upload_name {
            ui.separator();
            ui.label(RichText::new(name).strong());
        }
        if let Some(ts) = &state.last_updated {
            ui.label(RichText::new(format!("updated {ts}")).weak());
        }

        if state.loading {
            ui.spinner();
        }

        if let Some(notice) = &state.notice {
            ui.separator();
            let color = match notice {
                Notice::Warning(_) => WARNING_COLOR,
                Notice::Error(_) => Color32::RED,
            };
            ui.label(RichText::new(notice.text()).color(color));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new("Sync source: local workbook").weak());
        });
    });
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ui.strong("Search");
    let mut query = state.criteria.search_query.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut query)
            .hint_text("flight, airline, from, to"),
    );
    if response.changed() {
        state.set_search_query(query);
    }

    ui.add_space(8.0);

    ui.strong("Status");
    let current = state.criteria.status_filter.clone();
    let mut picked = None;
    egui::ComboBox::from_id_salt("status_filter")
        .selected_text(status_label(&current))
        .show_ui(ui, |ui: &mut Ui| {
            for option in &state.status_options {
                let label = status_label(option);
                if ui.selectable_label(current == *option, label).clicked() {
                    picked = Some(option.clone());
                }
            }
        });
    if let Some(status) = picked {
        state.set_status_filter(status);
    }

    ui.separator();

    if state.records.is_empty() {
        ui.label("No dataset loaded.");
        return;
    }

    ui.strong("Legend");
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (status, color) in state.status_colors.legend_entries() {
                ui.label(RichText::new(format!("● {status}")).color(color));
            }
        });
}

/// Text shown for a status value; the blank status gets a visible stand-in.
pub fn status_label(status: &str) -> &str {
    if status.is_empty() { "(blank)" } else { status }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(ctx: &egui::Context, state: &mut AppState, uploader: &mut Uploader) {
    let file = rfd::FileDialog::new()
        .set_title("Upload flight workbook")
        .add_filter("Excel workbooks", &WORKBOOK_EXTENSIONS)
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        uploader.start(path, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_status_has_visible_label() {
        assert_eq!(status_label(""), "(blank)");
        assert_eq!(status_label("Delayed"), "Delayed");
        assert_eq!(status_label("All"), "All");
    }
}
