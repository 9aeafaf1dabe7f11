use std::collections::HashSet;

use super::model::FlightRecord;

// ---------------------------------------------------------------------------
// View criteria: free-text search + status equality
// ---------------------------------------------------------------------------

/// Sentinel status option that disables the status filter.
pub const ALL_STATUSES: &str = "All";

/// The two user-controlled predicates applied to the active dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewCriteria {
    pub search_query: String,
    /// Either [`ALL_STATUSES`] or an exact status value from the dataset.
    pub status_filter: String,
}

impl Default for ViewCriteria {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            status_filter: ALL_STATUSES.to_string(),
        }
    }
}

impl ViewCriteria {
    pub fn filters_status(&self) -> bool {
        self.status_filter != ALL_STATUSES
    }

    /// Whether a record passes both predicates.
    ///
    /// * status: exact, case-sensitive equality unless the filter is "All"
    /// * search: case-insensitive substring of flight, airline, origin and
    ///   destination; an empty query matches everything
    pub fn matches(&self, record: &FlightRecord) -> bool {
        if self.filters_status() && record.status != self.status_filter {
            return false;
        }
        if self.search_query.is_empty() {
            return true;
        }
        record
            .search_text()
            .contains(&self.search_query.to_lowercase())
    }
}

// ---------------------------------------------------------------------------
// Derivations
// ---------------------------------------------------------------------------

/// Return indices of records that pass the current criteria.
pub fn visible_indices(records: &[FlightRecord], criteria: &ViewCriteria) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, rec)| criteria.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

/// "All" followed by each distinct status in first-seen order.
pub fn status_options(records: &[FlightRecord]) -> Vec<String> {
    let mut options = vec![ALL_STATUSES.to_string()];
    let mut seen: HashSet<&str> = HashSet::new();
    for rec in records {
        if seen.insert(rec.status.as_str()) {
            options.push(rec.status.clone());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(number: &str, airline: &str, from: &str, to: &str, status: &str) -> FlightRecord {
        FlightRecord {
            flight_number: number.into(),
            airline: airline.into(),
            origin: from.into(),
            destination: to.into(),
            status: status.into(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<FlightRecord> {
        vec![
            flight("SQ231", "Singapore Airlines", "SIN", "SYD", "On time"),
            flight("QF1", "Qantas", "SYD", "LHR", "Delayed"),
            flight("BA16", "British Airways", "SIN", "LHR", "On time"),
            flight("EK2", "Emirates", "DXB", "LHR", "Cancelled"),
        ]
    }

    #[test]
    fn default_criteria_show_everything() {
        let records = sample();
        let visible = visible_indices(&records, &ViewCriteria::default());
        assert_eq!(visible, vec![0, 1, 2, 3]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let records = sample();
        let criteria = ViewCriteria {
            search_query: "qAnTaS".into(),
            ..Default::default()
        };
        assert_eq!(visible_indices(&records, &criteria), vec![1]);

        let criteria = ViewCriteria {
            search_query: "lhr".into(),
            ..Default::default()
        };
        assert_eq!(visible_indices(&records, &criteria), vec![1, 2, 3]);
    }

    #[test]
    fn search_spans_field_boundaries() {
        let records = vec![flight("SQ231", "SIA", "SIN", "SYD", "On time")];

        let criteria = ViewCriteria {
            search_query: "sq231sia".into(),
            ..Default::default()
        };
        assert_eq!(visible_indices(&records, &criteria), vec![0]);

        // No field contains a space, and none is inserted between them.
        let criteria = ViewCriteria {
            search_query: " ".into(),
            ..Default::default()
        };
        assert!(visible_indices(&records, &criteria).is_empty());
    }

    #[test]
    fn search_ignores_status_text() {
        let records = sample();
        let criteria = ViewCriteria {
            search_query: "cancelled".into(),
            ..Default::default()
        };
        assert!(visible_indices(&records, &criteria).is_empty());
    }

    #[test]
    fn status_filter_is_exact() {
        let records = sample();
        let criteria = ViewCriteria {
            status_filter: "On time".into(),
            ..Default::default()
        };
        assert_eq!(visible_indices(&records, &criteria), vec![0, 2]);

        let criteria = ViewCriteria {
            status_filter: "on time".into(),
            ..Default::default()
        };
        assert!(visible_indices(&records, &criteria).is_empty());
    }

    #[test]
    fn both_predicates_combine() {
        let records = sample();
        let criteria = ViewCriteria {
            search_query: "sin".into(),
            status_filter: "On time".into(),
        };
        assert_eq!(visible_indices(&records, &criteria), vec![0, 2]);

        let criteria = ViewCriteria {
            search_query: "british".into(),
            status_filter: "Delayed".into(),
        };
        assert!(visible_indices(&records, &criteria).is_empty());
    }

    #[test]
    fn visible_rows_are_a_subset() {
        let records = sample();
        for query in ["", "s", "x", "1", "air"] {
            let criteria = ViewCriteria {
                search_query: query.into(),
                ..Default::default()
            };
            let visible = visible_indices(&records, &criteria);
            assert!(visible.iter().all(|&i| i < records.len()));
            assert!(visible.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn status_options_first_seen_order() {
        let options = status_options(&sample());
        assert_eq!(options, vec!["All", "On time", "Delayed", "Cancelled"]);
    }

    #[test]
    fn status_options_deduplicate_repeats() {
        let mut records = sample();
        records.extend(sample());
        records.push(flight("AF11", "Air France", "CDG", "JFK", "Delayed"));
        let options = status_options(&records);
        assert_eq!(options, vec!["All", "On time", "Delayed", "Cancelled"]);
    }

    #[test]
    fn status_options_on_empty_dataset() {
        assert_eq!(status_options(&[]), vec![ALL_STATUSES.to_string()]);
    }
}
