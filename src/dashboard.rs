use crate::charts::DashboardCharts;
use crate::extract::extract_report_text;
use crate::metrics::ReportMetrics;
use crate::parser::{ParserOptions, ReportParser};
use crate::period::period_bounds;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;
use tower_http::cors::CorsLayer;

#[derive(Debug, Clone)]
pub struct AppState {
    pub report_path: PathBuf,
    pub options: ParserOptions,
}

/// Everything the dashboard shows for one parse of the report.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub metrics: ReportMetrics,
    pub charts: DashboardCharts,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
}

impl DashboardView {
    pub fn from_metrics(metrics: ReportMetrics) -> Self {
        let bounds = period_bounds(&metrics.report_period);
        Self {
            charts: DashboardCharts::from_metrics(&metrics),
            period_start: bounds.map(|(start, _)| start),
            period_end: bounds.map(|(_, end)| end),
            metrics,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/metrics", get(api_metrics))
        .route("/api/health", get(health))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"ok": true}))
}

async fn index(State(state): State<AppState>) -> impl IntoResponse {
    match load_view(&state).await {
        Ok(view) => Html(render_page(&view)).into_response(),
        Err(err) => report_error(err).into_response(),
    }
}

async fn api_metrics(State(state): State<AppState>) -> impl IntoResponse {
    match load_view(&state).await {
        Ok(view) => Json(view).into_response(),
        Err(err) => report_error(err).into_response(),
    }
}

fn report_error(err: anyhow::Error) -> (StatusCode, String) {
    tracing::warn!("report unavailable: {err:#}");
    (
        StatusCode::BAD_GATEWAY,
        format!("Failed to read report: {err:#}"),
    )
}

/// Extract and parse the configured report. The PDF is read fresh each time.
pub async fn load_view(state: &AppState) -> anyhow::Result<DashboardView> {
    let path = state.report_path.clone();
    // PDF decoding is CPU-bound; keep it off the async workers.
    let text = tokio::task::spawn_blocking(move || extract_report_text(&path)).await??;
    tracing::debug!("==== PDF TEXT ====\n{text}");

    let parser = ReportParser::new(state.options);
    let metrics = parser.parse(&text);
    tracing::info!(
        path = %state.report_path.display(),
        daily_totals = parser.options().daily_totals,
        period = %metrics.report_period,
        total_pages = metrics.total_pages,
        "parsed report"
    );
    Ok(DashboardView::from_metrics(metrics))
}

pub fn render_page(view: &DashboardView) -> String {
    let m = &view.metrics;
    // "</" would end the script element early.
    let charts = serde_json::to_string(&view.charts)
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/");

    let period = match (view.period_start, view.period_end) {
        (Some(start), Some(end)) => format!(
            "{} ({start} to {end})",
            escape_html(&m.report_period)
        ),
        _ => escape_html(&m.report_period),
    };

    let rows = [
        ("Days in period", m.days_in_period.to_string()),
        ("Active users", m.active_users.to_string()),
        ("Active printers", m.active_printers.to_string()),
        ("Total printed pages", m.total_pages.to_string()),
        ("Total printed sheets", m.total_sheets.to_string()),
        ("Total jobs", m.total_jobs.to_string()),
        ("Pages per day", m.pages_per_day.to_string()),
        ("Sheets per day", m.sheets_per_day.to_string()),
        ("Trees consumed", format!("{:.2}", m.trees_consumed)),
        ("CO2 produced", format!("{:.2}", m.co2_produced)),
        ("Bulb hours", format!("{:.1}", m.env_bulb_hours)),
        ("Grayscale pages", m.grayscale_count.to_string()),
        ("Color pages", m.color_count.to_string()),
    ]
    .iter()
    .map(|(label, value)| format!("<tr><th>{label}</th><td>{value}</td></tr>"))
    .collect::<Vec<_>>()
    .join("\n");

    format!(
        r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>Print Usage Dashboard</title>
<script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
</head>
<body>
<h1>Print Usage Dashboard</h1>
<p class="period">{period}</p>
<table>
{rows}
</table>
<canvas id="jobs"></canvas>
<canvas id="color"></canvas>
<canvas id="duplex"></canvas>
<canvas id="daily"></canvas>
<script>
const charts = {charts};
const draw = (id, type, series) => {{
  if (!series.values.length) return;
  new Chart(document.getElementById(id), {{
    type,
    data: {{ labels: series.labels, datasets: [{{ label: id, data: series.values }}] }},
  }});
}};
draw("jobs", "bar", charts.jobs);
draw("color", "pie", charts.color);
draw("duplex", "pie", charts.duplex);
draw("daily", "line", charts.daily);
</script>
</body>
</html>
"#
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
