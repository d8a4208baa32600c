//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Strikeline - terminal tic-tac-toe for two players
#[derive(Parser, Debug)]
#[command(name = "strikeline")]
#[command(about = "Two-player terminal tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path of the JSON score file (overrides config)
    #[arg(long)]
    pub scores: Option<PathBuf>,

    /// Disable sound effects
    #[arg(long)]
    pub muted: bool,

    /// Log file path (overrides config)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Resolves the effective configuration: file first, flags on top.
    pub fn resolve_config(&self) -> Result<crate::config::AppConfig, crate::config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => crate::config::AppConfig::from_file(path)?,
            None => crate::config::AppConfig::default(),
        };

        if let Some(scores) = &self.scores {
            config.scores_path = scores.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = log_file.clone();
        }
        if self.muted {
            config.sound = false;
        }

        Ok(config)
    }
}
