use super::model::{FlightRecord, SheetRow};

// ---------------------------------------------------------------------------
// Target fields and the header aliases they are read from
// ---------------------------------------------------------------------------

/// The fixed record shape every spreadsheet row is mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightField {
    FlightNumber,
    Airline,
    Origin,
    Destination,
    DepartureTime,
    ArrivalTime,
    Status,
    Gate,
    Terminal,
}

impl FlightField {
    pub const ALL: [FlightField; 9] = [
        FlightField::FlightNumber,
        FlightField::Airline,
        FlightField::Origin,
        FlightField::Destination,
        FlightField::DepartureTime,
        FlightField::ArrivalTime,
        FlightField::Status,
        FlightField::Gate,
        FlightField::Terminal,
    ];

    /// Header names tried in order. Matching is case-sensitive.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            FlightField::FlightNumber => &["Flight", "flight"],
            FlightField::Airline => &["Airline", "airline"],
            FlightField::Origin => &["From", "from"],
            FlightField::Destination => &["To", "to"],
            FlightField::DepartureTime => &["Departure", "dep", "Dep"],
            FlightField::ArrivalTime => &["Arrival", "arr", "Arr"],
            FlightField::Status => &["Status", "status"],
            FlightField::Gate => &["Gate", "gate"],
            FlightField::Terminal => &["Terminal", "terminal"],
        }
    }

    /// Column heading used by the table.
    pub fn label(self) -> &'static str {
        match self {
            FlightField::FlightNumber => "Flight",
            FlightField::Airline => "Airline",
            FlightField::Origin => "From",
            FlightField::Destination => "To",
            FlightField::DepartureTime => "Departure",
            FlightField::ArrivalTime => "Arrival",
            FlightField::Status => "Status",
            FlightField::Gate => "Gate",
            FlightField::Terminal => "Terminal",
        }
    }

    pub fn get(self, record: &FlightRecord) -> &str {
        match self {
            FlightField::FlightNumber => &record.flight_number,
            FlightField::Airline => &record.airline,
            FlightField::Origin => &record.origin,
            FlightField::Destination => &record.destination,
            FlightField::DepartureTime => &record.departure_time,
            FlightField::ArrivalTime => &record.arrival_time,
            FlightField::Status => &record.status,
            FlightField::Gate => &record.gate,
            FlightField::Terminal => &record.terminal,
        }
    }
}

// ---------------------------------------------------------------------------
// Alias resolution
// ---------------------------------------------------------------------------

/// Value of the first alias carrying a non-empty cell, or `""`.
///
/// Every header in the sheet is present in every row (blank cells decode to
/// `""`), so an empty `Flight` column must not shadow a filled `flight` one.
pub fn resolve_field(row: &SheetRow, field: FlightField) -> String {
    field
        .aliases()
        .iter()
        .filter_map(|alias| row.get(*alias))
        .find(|value| !value.is_empty())
        .cloned()
        .unwrap_or_default()
}

/// Map one generic row onto the fixed record shape.
pub fn resolve_record(row: &SheetRow) -> FlightRecord {
    FlightRecord {
        flight_number: resolve_field(row, FlightField::FlightNumber),
        airline: resolve_field(row, FlightField::Airline),
        origin: resolve_field(row, FlightField::Origin),
        destination: resolve_field(row, FlightField::Destination),
        departure_time: resolve_field(row, FlightField::DepartureTime),
        arrival_time: resolve_field(row, FlightField::ArrivalTime),
        status: resolve_field(row, FlightField::Status),
        gate: resolve_field(row, FlightField::Gate),
        terminal: resolve_field(row, FlightField::Terminal),
    }
}

/// Map every row and keep only those naming a flight or an airline.
pub fn records_from_rows(rows: &[SheetRow]) -> Vec<FlightRecord> {
    rows.iter()
        .map(resolve_record)
        .filter(FlightRecord::is_identified)
        .collect()
}

/// Human-readable list of the headers ingestion understands, for the
/// empty-result warning.
pub fn expected_headers() -> String {
    FlightField::ALL
        .iter()
        .map(|field| field.aliases()[0])
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, &str)]) -> SheetRow {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn capitalised_alias_wins_when_both_present() {
        let r = row(&[("Flight", "SQ231"), ("flight", "XX999")]);
        assert_eq!(resolve_field(&r, FlightField::FlightNumber), "SQ231");
    }

    #[test]
    fn falls_back_to_later_alias() {
        let r = row(&[("dep", "08:15"), ("Arr", "11:40")]);
        assert_eq!(resolve_field(&r, FlightField::DepartureTime), "08:15");
        assert_eq!(resolve_field(&r, FlightField::ArrivalTime), "11:40");
    }

    #[test]
    fn empty_primary_column_does_not_shadow_alias() {
        let r = row(&[("Flight", ""), ("flight", "LH400")]);
        assert_eq!(resolve_field(&r, FlightField::FlightNumber), "LH400");
    }

    #[test]
    fn aliases_are_case_sensitive() {
        let r = row(&[("FLIGHT", "AF11"), ("STATUS", "Delayed")]);
        let rec = resolve_record(&r);
        assert_eq!(rec.flight_number, "");
        assert_eq!(rec.status, "");
    }

    #[test]
    fn missing_optional_columns_default_to_empty() {
        let r = row(&[
            ("Flight", "SQ231"),
            ("Airline", "Singapore Airlines"),
            ("Status", "On time"),
        ]);
        let records = records_from_rows(&[r]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].gate, "");
        assert_eq!(records[0].terminal, "");
        assert_eq!(records[0].status, "On time");
    }

    #[test]
    fn rows_without_flight_or_airline_are_dropped() {
        let rows = vec![
            row(&[("Flight", ""), ("Airline", ""), ("Status", "Cancelled")]),
            row(&[("Flight", ""), ("Airline", "Qantas"), ("Status", "Delayed")]),
            row(&[("Flight", "EK2"), ("Airline", ""), ("From", "DXB")]),
        ];
        let records = records_from_rows(&rows);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].airline, "Qantas");
        assert_eq!(records[1].flight_number, "EK2");
        assert_eq!(records[1].origin, "DXB");
    }

    #[test]
    fn expected_headers_lists_primary_aliases() {
        let headers = expected_headers();
        assert!(headers.starts_with("Flight, Airline, From, To"));
        assert!(headers.ends_with("Gate, Terminal"));
    }
}
