use serde::{Deserialize, Serialize};

/// Usage figures read from one executive summary report.
///
/// `ReportMetrics::default()` is the zero value every parse starts from: a
/// field whose line never shows up in the report keeps its zero or empty
/// value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportMetrics {
    pub report_period: String,
    pub days_in_period: u64,
    pub active_users: u64,
    pub active_printers: u64,
    pub total_pages: u64,
    pub total_sheets: u64,
    pub total_jobs: u64,
    pub pages_per_day: u64,
    pub sheets_per_day: u64,
    pub trees_consumed: f64,
    pub co2_produced: f64,
    pub env_bulb_hours: f64,
    pub grayscale_pct: f64,
    pub color_pct: f64,
    pub duplex_pct: f64,
    pub simplex_pct: f64,
    pub grayscale_count: u64,
    pub color_count: u64,
    pub scan_count: u64,
    pub copy_count: u64,
    pub print_count: u64,
    pub fax_count: u64,
    pub daily_totals: Vec<u64>,
}

impl ReportMetrics {
    /// True when no line of the report was recognized.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let metrics = ReportMetrics::default();
        assert!(metrics.is_empty());
        assert!(metrics.report_period.is_empty());
        assert!(metrics.daily_totals.is_empty());
        assert_eq!(metrics.trees_consumed, 0.0);
    }

    #[test]
    fn test_serializes_field_names() {
        let metrics = ReportMetrics {
            total_pages: 6561,
            ..ReportMetrics::default()
        };
        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["total_pages"], 6561);
        assert_eq!(json["daily_totals"], serde_json::json!([]));
        assert!(!metrics.is_empty());
    }
}
