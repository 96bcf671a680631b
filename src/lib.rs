//! Printer usage metrics read from an executive summary PDF, served as a
//! small web dashboard.
//!
//! [`parse_report`] is the core: it turns extracted report text into a
//! [`ReportMetrics`] record and never fails. The other modules read the PDF,
//! derive chart series, and serve the result over HTTP.

pub mod charts;
pub mod config;
pub mod dashboard;
pub mod extract;
pub mod metrics;
pub mod numbers;
pub mod parser;
pub mod period;

pub use charts::{ChartSeries, DashboardCharts};
pub use metrics::ReportMetrics;
pub use parser::{ParserOptions, ReportParser, parse_report};
