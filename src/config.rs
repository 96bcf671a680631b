use crate::parser::ParserOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";

/// Settings loaded from dashboard.toml.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReportConfig {
    /// PDF re-read on every dashboard request.
    #[serde(default = "default_report_path")]
    pub path: PathBuf,
    #[serde(default = "default_daily_totals")]
    pub daily_totals: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: default_report_path(),
            daily_totals: default_daily_totals(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_report_path() -> PathBuf {
    PathBuf::from("executive_summary.pdf")
}
fn default_daily_totals() -> bool {
    true
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub report: Option<PathBuf>,
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub no_daily_totals: bool,
}

impl DashboardConfig {
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(report) = overrides.report {
            self.report.path = report;
        }
        if let Some(bind) = overrides.bind {
            self.server.bind = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if overrides.no_daily_totals {
            self.report.daily_totals = false;
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }

    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            daily_totals: self.report.daily_totals,
        }
    }
}

/// Load config from `path`, or defaults when it is missing or malformed.
pub fn load_config(path: &Path) -> DashboardConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!("failed to parse {}: {e}", path.display());
                DashboardConfig::default()
            }
        },
        Err(_) => {
            tracing::debug!("no config at {}, using defaults", path.display());
            DashboardConfig::default()
        }
    }
}
