use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender, channel};

use anyhow::{Context, Result};
use eframe::egui;

// ---------------------------------------------------------------------------
// Background file reads
// ---------------------------------------------------------------------------

/// Bytes of one picked file, read off the UI thread.
pub struct UploadPayload {
    /// File name shown in the UI (no directory).
    pub name: String,
    pub bytes: Result<Vec<u8>>,
}

/// Reads picked files on worker threads and hands the bytes back to the UI.
///
/// Overlapping uploads are not serialised: payloads are drained in arrival
/// order, so the last read to finish decides the dataset.
pub struct Uploader {
    tx: Sender<UploadPayload>,
    rx: Receiver<UploadPayload>,
    in_flight: usize,
}

impl Default for Uploader {
    fn default() -> Self {
        let (tx, rx) = channel();
        Self {
            tx,
            rx,
            in_flight: 0,
        }
    }
}

impl Uploader {
    /// Start reading `path`. `ctx` is woken once the bytes are ready.
    pub fn start(&mut self, path: PathBuf, ctx: &egui::Context) {
        let name = display_name(&path);
        log::debug!("reading {}", path.display());

        let tx = self.tx.clone();
        let ctx = ctx.clone();
        self.in_flight += 1;
        std::thread::spawn(move || {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("reading {}", path.display()));
            // The receiver only goes away when the app is shutting down.
            let _ = tx.send(UploadPayload { name, bytes });
            ctx.request_repaint();
        });
    }

    /// Payloads that finished since the last call, oldest first.
    pub fn drain(&mut self) -> Vec<UploadPayload> {
        let done: Vec<UploadPayload> = self.rx.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(done.len());
        done
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}

/// File name without its directory, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
