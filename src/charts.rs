use crate::metrics::ReportMetrics;
use serde::Serialize;

/// Labels and values for one chart, index-aligned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries<T> {
    pub labels: Vec<String>,
    pub values: Vec<T>,
}

impl<T> ChartSeries<T> {
    fn new(labels: &[&str], values: Vec<T>) -> Self {
        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Chart data the dashboard page draws from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCharts {
    pub jobs: ChartSeries<u64>,
    pub color: ChartSeries<f64>,
    pub duplex: ChartSeries<f64>,
    pub daily: ChartSeries<u64>,
}

impl DashboardCharts {
    pub fn from_metrics(metrics: &ReportMetrics) -> Self {
        let daily_labels = (1..=metrics.daily_totals.len())
            .map(|day| format!("Day {day}"))
            .collect();

        Self {
            jobs: ChartSeries::new(
                &["Scan", "Copy", "Print", "Fax"],
                vec![
                    metrics.scan_count,
                    metrics.copy_count,
                    metrics.print_count,
                    metrics.fax_count,
                ],
            ),
            color: ChartSeries::new(
                &["Grayscale", "Color"],
                vec![share(metrics.grayscale_pct), share(metrics.color_pct)],
            ),
            duplex: ChartSeries::new(
                &["Duplex", "Simplex"],
                vec![share(metrics.duplex_pct), share(metrics.simplex_pct)],
            ),
            daily: ChartSeries {
                labels: daily_labels,
                values: metrics.daily_totals.clone(),
            },
        }
    }
}

// Pie slices only; the record keeps whatever the report printed.
fn share(pct: f64) -> f64 {
    pct.clamp(0.0, 100.0)
}
