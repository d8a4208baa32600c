//! Strikeline binary entry point.

use anyhow::{Context, Result};
use clap::Parser;
use strikeline::cli::Cli;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    // Log to a file so output cannot corrupt the terminal UI.
    let log_file = std::fs::File::create(&config.log_file)
        .with_context(|| format!("Failed to create log file {}", config.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(scores = %config.scores_path.display(), sound = config.sound, "Starting Strikeline");

    strikeline::tui::run(config)
}
