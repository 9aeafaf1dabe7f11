use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};

/// (flight, airline, from, to, departure, arrival, status, gate, terminal)
type Row = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const FLIGHTS: &[Row] = &[
    ("SQ231", "Singapore Airlines", "SIN", "SYD", "08:15", "18:40", "On time", "C3", "3"),
    ("QF1", "Qantas", "SYD", "LHR", "15:25", "05:10", "Delayed", "D10", "1"),
    ("BA16", "British Airways", "SIN", "LHR", "23:05", "05:55", "On time", "", ""),
    ("EK2", "Emirates", "DXB", "LHR", "07:45", "11:35", "Boarding", "A12", "3"),
    ("LH400", "Lufthansa", "FRA", "JFK", "10:30", "13:15", "Cancelled", "Z25", "1"),
    ("AF11", "Air France", "CDG", "JFK", "13:30", "15:40", "On time", "K40", "2E"),
    ("NH10", "ANA", "HND", "JFK", "10:40", "10:20", "Delayed", "", "3"),
    ("CX888", "Cathay Pacific", "HKG", "YVR", "00:15", "20:20", "Boarding", "", "1"),
];

fn main() -> Result<()> {
    let output_path = "sample_flights.xlsx";

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Departures")?;

    // Deliberately mixed header spellings: "dep" / "arr" are accepted aliases.
    let headers = [
        "Flight", "Airline", "From", "To", "dep", "arr", "Status", "Gate", "Terminal",
    ];
    for (col, title) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    let mut row: u32 = 1;
    for flight in FLIGHTS {
        let (number, airline, from, to, dep, arr, status, gate, terminal) = *flight;
        let cells = [number, airline, from, to, dep, arr, status, gate, terminal];
        for (col, value) in cells.iter().enumerate() {
            if !value.is_empty() {
                sheet.write_string(row, col as u16, *value)?;
            }
        }
        row += 1;
    }

    // Rows the dashboard drops: no flight number and no airline.
    for status in ["Cancelled", "Diverted"] {
        sheet.write_string(row, 6, status)?;
        row += 1;
    }

    // A second sheet the dashboard never reads.
    let notes = workbook.add_worksheet();
    notes.set_name("Notes")?;
    notes.write_string(0, 0, "Only the first sheet is imported.")?;

    workbook
        .save(output_path)
        .with_context(|| format!("writing {output_path}"))?;

    println!(
        "Wrote {} flight rows (+2 unidentified) to {output_path}",
        FLIGHTS.len()
    );
    Ok(())
}
