//! Application configuration.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// User-configurable settings, loadable from a TOML file.
///
/// Command-line flags override whatever the file provides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path of the JSON score file.
    #[serde(default = "default_scores_path")]
    pub scores_path: PathBuf,

    /// Whether sound effects are enabled.
    #[serde(default = "default_sound")]
    pub sound: bool,

    /// Log file path. The log goes to a file so it cannot corrupt the
    /// terminal UI.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

fn default_scores_path() -> PathBuf {
    PathBuf::from("strikeline_scores.json")
}

fn default_sound() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strikeline.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scores_path: default_scores_path(),
            sound: default_sound(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!("Config loaded successfully");
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.sound);
        assert_eq!(config.scores_path, PathBuf::from("strikeline_scores.json"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "sound = false\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert!(!config.sound);
        assert_eq!(config.scores_path, default_scores_path());
    }

    #[test]
    fn test_malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "sound = maybe").unwrap();

        assert!(AppConfig::from_file(&path).is_err());
    }
}
