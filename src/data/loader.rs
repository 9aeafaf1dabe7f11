use std::io::Cursor;

use calamine::{Data, ExcelDateTime, Reader, open_workbook_auto_from_rs};
use thiserror::Error;

use super::model::SheetRow;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    /// The bytes are not a workbook calamine can read, or the first sheet
    /// could not be parsed.
    #[error("could not read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("workbook contains no sheets")]
    NoSheets,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Decode an in-memory workbook into generic rows of its **first** sheet.
///
/// The format is sniffed from the content, not from a file name:
/// * `.xls`            – legacy BIFF
/// * `.xlsx` / `.xlsm` – Office Open XML
/// * `.xlsb` / `.ods`  – accepted as well, since the picker filter is the only
///   gate on what arrives here
///
/// The first row of the sheet's used range is taken as the header row.
pub fn decode_workbook(bytes: &[u8]) -> Result<Vec<SheetRow>, LoadError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let sheet_names = workbook.sheet_names();
    log::debug!("workbook sheets: {sheet_names:?}");

    let range = workbook.worksheet_range_at(0).ok_or(LoadError::NoSheets)??;

    let mut rows = range.rows();
    let Some(header_cells) = rows.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header_cells
        .iter()
        .map(|cell| cell_to_string(cell).trim().to_string())
        .collect();

    let mut out = Vec::new();
    for cells in rows {
        if cells.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }

        let mut row = SheetRow::new();
        for (header, cell) in headers.iter().zip(cells) {
            if header.is_empty() {
                continue;
            }
            // Duplicate headers keep the leftmost column.
            row.entry(header.clone())
                .or_insert_with(|| cell_to_string(cell));
        }
        out.push(row);
    }

    log::debug!(
        "decoded {} data rows across {} columns",
        out.len(),
        headers.len()
    );
    Ok(out)
}

// ---------------------------------------------------------------------------
// Cell rendering
// ---------------------------------------------------------------------------

/// Render any cell as the text shown in the table.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => datetime_to_string(dt),
    }
}

/// Durations (`[h]:mm` formats) render as total `H:MM`; date-times as
/// calendar values, where serials below one day carry only a time of day.
fn datetime_to_string(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return duration_to_string(dt.as_f64());
    }
    let pattern = if dt.as_f64() < 1.0 {
        "%H:%M"
    } else {
        "%Y-%m-%d %H:%M"
    };
    match dt.as_datetime() {
        Some(naive) => naive.format(pattern).to_string(),
        None => dt.as_f64().to_string(),
    }
}

/// `days` is the raw serial value of a duration cell.
fn duration_to_string(days: f64) -> String {
    let total_minutes = (days * 24.0 * 60.0).round() as i64;
    let sign = if total_minutes < 0 { "-" } else { "" };
    let minutes = total_minutes.abs();
    format!("{sign}{}:{:02}", minutes / 60, minutes % 60)
}
