use crate::color::StatusColors;
use crate::data::columns::{expected_headers, records_from_rows};
use crate::data::filter::{ALL_STATUSES, ViewCriteria, status_options, visible_indices};
use crate::data::loader::decode_workbook;
use crate::data::model::FlightRecord;

/// Shown for every decode or read failure; details go to the log only.
pub const DECODE_ERROR_MESSAGE: &str =
    "Could not read workbook. Make sure the file is a valid .xls, .xlsx or .xlsm spreadsheet.";

// ---------------------------------------------------------------------------
// User-facing notice
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Workbook decoded but no row named a flight or an airline.
    Warning(String),
    /// Workbook could not be decoded; the previous dataset is still shown.
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Warning(msg) | Notice::Error(msg) => msg,
        }
    }
}

/// What a single upload did to the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Dataset replaced with this many records.
    Loaded(usize),
    /// Dataset cleared: nothing survived column mapping.
    Empty,
    /// Dataset untouched.
    Failed,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Active dataset. Only ever replaced as a whole.
    pub records: Vec<FlightRecord>,

    /// Search query and status filter.
    pub criteria: ViewCriteria,

    /// Indices of records passing the current criteria (cached).
    pub visible_indices: Vec<usize>,

    /// "All" followed by the distinct statuses in first-seen order (cached).
    pub status_options: Vec<String>,

    /// Colours for the status column and legend.
    pub status_colors: StatusColors,

    /// Display name of the last successfully decoded upload.
    pub upload_name: Option<String>,

    /// Local time of the last successful decode.
    pub last_updated: Option<String>,

    /// Warning / error message shown in the UI.
    pub notice: Option<Notice>,

    /// Whether a file read is in flight.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            criteria: ViewCriteria::default(),
            visible_indices: Vec::new(),
            status_options: vec![ALL_STATUSES.to_string()],
            status_colors: StatusColors::default(),
            upload_name: None,
            last_updated: None,
            notice: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Decode an uploaded workbook and, on success, replace the dataset.
    pub fn ingest(&mut self, name: &str, bytes: &[u8]) -> IngestOutcome {
        let timestamp = chrono::Local::now()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        self.ingest_at(name, bytes, timestamp)
    }

    /// [`AppState::ingest`] with the "last updated" label supplied by the caller.
    pub fn ingest_at(&mut self, name: &str, bytes: &[u8], timestamp: String) -> IngestOutcome {
        self.loading = false;

        let rows = match decode_workbook(bytes) {
            Ok(rows) => rows,
            Err(e) => {
                log::error!("Failed to decode {name}: {e:#}");
                self.notice = Some(Notice::Error(DECODE_ERROR_MESSAGE.to_string()));
                return IngestOutcome::Failed;
            }
        };

        let records = records_from_rows(&rows);
        let dropped = rows.len() - records.len();
        let outcome = if records.is_empty() {
            log::warn!(
                "{name}: none of {} rows has a flight or airline column value",
                rows.len()
            );
            self.notice = Some(Notice::Warning(format!(
                "No flights found in {name}. Expected column headers: {}.",
                expected_headers()
            )));
            IngestOutcome::Empty
        } else {
            log::info!(
                "Loaded {} flights from {name} ({dropped} rows dropped)",
                records.len()
            );
            self.notice = None;
            IngestOutcome::Loaded(records.len())
        };

        self.set_records(records);
        self.upload_name = Some(name.to_string());
        self.last_updated = Some(timestamp);
        outcome
    }

    /// Record a failure that happened before decoding (reading the file).
    pub fn upload_failed(&mut self, name: &str, error: &anyhow::Error) {
        log::error!("Failed to read {name}: {error:#}");
        self.notice = Some(Notice::Error(DECODE_ERROR_MESSAGE.to_string()));
        self.loading = false;
    }

    /// Replace the dataset wholesale and rebuild every derived value.
    fn set_records(&mut self, records: Vec<FlightRecord>) {
        self.records = records;
        self.status_options = status_options(&self.records);
        self.status_colors = StatusColors::new(&self.status_options[1..]);
        if !self.status_options.contains(&self.criteria.status_filter) {
            self.criteria.status_filter = ALL_STATUSES.to_string();
        }
        self.refilter();
    }

    /// Recompute `visible_indices` after a criteria change.
    pub fn refilter(&mut self) {
        self.visible_indices = visible_indices(&self.records, &self.criteria);
    }

    pub fn set_search_query(&mut self, query: String) {
        self.criteria.search_query = query;
        self.refilter();
    }

    pub fn set_status_filter(&mut self, status: String) {
        self.criteria.status_filter = status;
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.criteria = ViewCriteria::default();
        self.refilter();
    }

    /// Records passing the current criteria, in dataset order.
    pub fn visible_records(&self) -> impl Iterator<Item = &FlightRecord> {
        self.visible_indices.iter().map(|&i| &self.records[i])
    }

    /// Number of distinct airlines in the dataset.
    pub fn airline_count(&self) -> usize {
        let mut airlines: Vec<&str> = self
            .records
            .iter()
            .map(|r| r.airline.as_str())
            .filter(|a| !a.is_empty())
            .collect();
        airlines.sort_unstable();
        airlines.dedup();
        airlines.len()
    }
}
