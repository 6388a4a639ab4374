//! Scrapion main entry point
//!
//! This is the command-line interface for the Scrapion web content retriever.

use anyhow::Context;
use clap::Parser;
use scrapion::config::{load_config_with_hash, Config};
use scrapion::{Client, ReportDestination};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Scrapion: web content retrieval with candidate fallback
///
/// Fetches a URL directly, or searches for a query and tries the top results
/// one at a time, then emits a JSON report of every attempt.
#[derive(Parser, Debug)]
#[command(name = "scrapion")]
#[command(version)]
#[command(about = "Web scraping automation system", long_about = None)]
struct Cli {
    /// Input URL or search query
    #[arg(value_name = "INPUT")]
    input: String,

    /// Report output destination
    #[arg(long, value_parser = ["stdio", "file"])]
    report: String,

    /// Output file path (required when --report file)
    #[arg(long, value_name = "PATH", required_if_eq("report", "file"))]
    output: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Reject a bad output request before anything is fetched
    let destination = ReportDestination::from_parts(&cli.report, cli.output.as_deref())?;

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    let mut client = Client::from_config(&config).context("Failed to build client")?;
    client.run(&cli.input).await;

    client
        .output_report(&destination)
        .context("Failed to write report")?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdio reports stay a clean JSON document.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("scrapion=info,warn"),
            1 => EnvFilter::new("scrapion=debug,info"),
            2 => EnvFilter::new("scrapion=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
