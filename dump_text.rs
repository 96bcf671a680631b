use clap::Parser;
use print_usage_dashboard::extract::extract_report_text;
use print_usage_dashboard::{ParserOptions, ReportParser};
use std::path::PathBuf;

/// Print the text of a report PDF line by line, to check what the parser sees.
#[derive(Parser, Debug)]
#[command(name = "dump-text", about)]
struct Args {
    /// Report PDF
    path: PathBuf,

    /// Also print the parsed metrics as JSON
    #[arg(long)]
    parse: bool,

    /// Ignore bare numeric lines when parsing
    #[arg(long)]
    no_daily_totals: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let text = extract_report_text(&args.path)?;

    println!("=== FULL PDF TEXT ===");
    for (i, line) in text.lines().enumerate() {
        if !line.trim().is_empty() {
            println!("{}: {:?}", i, line);
        }
    }

    if args.parse {
        let parser = ReportParser::new(ParserOptions {
            daily_totals: !args.no_daily_totals,
        });
        let metrics = parser.parse(&text);
        println!("=== PARSED METRICS ===");
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    }

    Ok(())
}
