use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// SheetRow – one decoded spreadsheet row before column mapping
// ---------------------------------------------------------------------------

/// Header text → cell value rendered as a string.
/// Cells missing from the sheet are stored as the empty string.
pub type SheetRow = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// FlightRecord – one row of the active dataset
// ---------------------------------------------------------------------------

/// A single flight, every field already coerced to text.
///
/// `departure_time` / `arrival_time` are free text exactly as they appeared
/// in the workbook; nothing downstream parses them as dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightRecord {
    pub flight_number: String,
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub status: String,
    /// Empty when the workbook has no gate column.
    pub gate: String,
    /// Empty when the workbook has no terminal column.
    pub terminal: String,
}

impl FlightRecord {
    /// A record is worth keeping when it names a flight or an airline.
    pub fn is_identified(&self) -> bool {
        !self.flight_number.is_empty() || !self.airline.is_empty()
    }

    /// Lower-cased haystack for the free-text search: the route fields
    /// concatenated with no separator.
    pub fn search_text(&self) -> String {
        [
            self.flight_number.as_str(),
            self.airline.as_str(),
            self.origin.as_str(),
            self.destination.as_str(),
        ]
        .concat()
        .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identified_by_either_flight_or_airline() {
        let mut rec = FlightRecord::default();
        assert!(!rec.is_identified());

        rec.airline = "KLM".into();
        assert!(rec.is_identified());

        rec.airline.clear();
        rec.flight_number = "KL1001".into();
        assert!(rec.is_identified());
    }

    #[test]
    fn search_text_covers_route_fields_only() {
        let rec = FlightRecord {
            flight_number: "BA117".into(),
            airline: "British Airways".into(),
            origin: "LHR".into(),
            destination: "JFK".into(),
            status: "Boarding".into(),
            gate: "B32".into(),
            ..Default::default()
        };
        let text = rec.search_text();
        assert!(text.contains("ba117"));
        assert!(text.contains("british airways"));
        assert!(text.contains("lhr"));
        assert!(text.contains("jfk"));
        assert!(!text.contains("boarding"));
        assert!(!text.contains("b32"));
    }

    #[test]
    fn search_text_has_no_separator() {
        let rec = FlightRecord {
            flight_number: "SQ231".into(),
            airline: "SIA".into(),
            origin: "SIN".into(),
            destination: "SYD".into(),
            ..Default::default()
        };
        assert_eq!(rec.search_text(), "sq231siasinsyd");
    }
}
