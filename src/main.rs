mod app;
mod color;
mod data;
mod state;
mod ui;
mod upload;

use std::path::PathBuf;

use app::FlightBoardApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional workbook to load at startup: `flight-board departures.xlsx`
    let startup_file = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Flight Board – Operations Upload",
        options,
        Box::new(move |cc| {
            Ok(Box::new(FlightBoardApp::new(&cc.egui_ctx, startup_file)))
        }),
    )
}
