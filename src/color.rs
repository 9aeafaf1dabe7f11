use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// `n` distinct colours on evenly spaced hues, starting from green so the
/// first status seen (usually "On time" / "Scheduled") reads as healthy.
pub fn status_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = 120.0 + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.50);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Status value → Color32
// ---------------------------------------------------------------------------

/// Colours for the distinct statuses of the current dataset.
#[derive(Debug, Clone, Default)]
pub struct StatusColors {
    mapping: BTreeMap<String, Color32>,
}

impl StatusColors {
    pub const UNKNOWN: Color32 = Color32::GRAY;

    /// `statuses` are the distinct values, without the "All" sentinel.
    pub fn new(statuses: &[String]) -> Self {
        let mapping = statuses
            .iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .zip(status_palette(statuses.len()))
            .collect();
        Self { mapping }
    }

    pub fn color_for(&self, status: &str) -> Color32 {
        self.mapping.get(status).copied().unwrap_or(Self::UNKNOWN)
    }

    /// Legend entries (status → colour), sorted by status.
    pub fn legend_entries(&self) -> impl Iterator<Item = (&str, Color32)> {
        self.mapping.iter().map(|(s, c)| (s.as_str(), *c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_len_and_distinct() {
        let colors = status_palette(4);
        assert_eq!(colors.len(), 4);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(status_palette(0).is_empty());
    }

    #[test]
    fn unknown_and_blank_statuses_are_grey() {
        let colors = StatusColors::new(&["On time".to_string(), String::new(), "Delayed".to_string()]);
        assert_ne!(colors.color_for("On time"), StatusColors::UNKNOWN);
        assert_ne!(colors.color_for("Delayed"), StatusColors::UNKNOWN);
        assert_eq!(colors.color_for(""), StatusColors::UNKNOWN);
        assert_eq!(colors.color_for("Diverted"), StatusColors::UNKNOWN);
        assert_eq!(colors.legend_entries().count(), 2);
    }
}
