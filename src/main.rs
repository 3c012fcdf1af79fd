use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use doaj_probe::config::resolve_settings;
use doaj_probe::transport::HttpTransport;
use doaj_probe::ui::Console;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// DOAJ Probe - Find out which DOAJ search API endpoints currently respond
#[derive(Parser, Debug)]
#[command(name = "doaj-probe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Probe DOAJ search API endpoint variants and summarize which ones work", long_about = None)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(long, short)]
    quiet: bool,

    /// Settings file path (TOML); without it the built-in defaults are used
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// Format for diagnostic logs on stderr
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}

fn init_tracing(cli: &Cli) {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let level = if cli.quiet { "error" } else { log_level };

    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("doaj_probe={}", level)),
    );

    // stdout carries the report only
    let registry = tracing_subscriber::registry().with(filter);
    match cli.log_format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let settings =
        resolve_settings(cli.config.as_deref()).context("Failed to load settings file")?;
    if let Some(path) = &cli.config {
        tracing::info!("Using config file: {}", path.display());
    }

    let transport = Arc::new(
        HttpTransport::with_user_agent(&settings.user_agent)
            .context("Failed to create HTTP client")?,
    );

    let mut console = Console::stdout(!cli.no_color);
    doaj_probe::run(transport, &settings, &mut console)
        .await
        .context("Failed to write report")?;

    Ok(())
}
