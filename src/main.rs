use clap::Parser;
use print_usage_dashboard::config::{self, DEFAULT_CONFIG_FILE, Overrides};
use print_usage_dashboard::dashboard::{self, AppState};
use std::path::PathBuf;

/// Serve printer usage metrics from an executive summary PDF.
#[derive(Parser, Debug)]
#[command(name = "print-usage-dashboard", version, about)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Report PDF (overrides config)
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Bind address (overrides config)
    #[arg(long)]
    bind: Option<String>,

    /// Port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Ignore bare numeric lines instead of collecting daily totals
    #[arg(long)]
    no_daily_totals: bool,

    /// Log the extracted report text and per-line classification
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "print_usage_dashboard=trace"
    } else {
        "print_usage_dashboard=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();
    tracing::debug!(?cli, "parsed CLI arguments");

    let mut cfg = config::load_config(&cli.config);
    cfg.apply(Overrides {
        report: cli.report,
        bind: cli.bind,
        port: cli.port,
        no_daily_totals: cli.no_daily_totals,
    });

    if !cfg.report.path.exists() {
        tracing::warn!(
            "report {} does not exist yet; requests will fail until it does",
            cfg.report.path.display()
        );
    }

    let state = AppState {
        report_path: cfg.report.path.clone(),
        options: cfg.parser_options(),
    };
    let app = dashboard::router(state);

    let listener = tokio::net::TcpListener::bind(cfg.addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
