use std::path::PathBuf;

use eframe::egui;

use crate::state::{AppState, IngestOutcome};
use crate::ui::{panels, summary, table};
use crate::upload::Uploader;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FlightBoardApp {
    pub state: AppState,
    uploader: Uploader,
}

impl FlightBoardApp {
    /// Optionally queue a workbook given on the command line.
    pub fn new(ctx: &egui::Context, startup_file: Option<PathBuf>) -> Self {
        let mut app = Self::default();
        if let Some(path) = startup_file {
            app.state.loading = true;
            app.uploader.start(path, ctx);
        }
        app
    }

    /// Decode every file read that finished since the last frame.
    fn poll_uploads(&mut self) {
        for payload in self.uploader.drain() {
            match payload.bytes {
                Ok(bytes) => match self.state.ingest(&payload.name, &bytes) {
                    IngestOutcome::Loaded(n) => {
                        log::debug!("{}: showing {n} flights", payload.name)
                    }
                    IngestOutcome::Empty | IngestOutcome::Failed => {}
                },
                Err(e) => self.state.upload_failed(&payload.name, &e),
            }
        }
        self.state.loading = self.uploader.is_busy();
    }
}

impl eframe::App for FlightBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_uploads();

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &mut self.uploader);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: summary + table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            summary::summary_tiles(ui, &self.state);
            ui.add_space(8.0);
            table::flight_table(ui, &self.state);
        });
    }
}
