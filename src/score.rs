//! Score tallies and their persistence.
//!
//! The shell owns the score record; the rules engine only reports
//! outcomes. Persistence is a single JSON blob round-trip with no
//! versioning or migration.

use crate::game::{GameResult, Player};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Win/draw tallies across games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Games won by X.
    pub wins_x: u32,
    /// Games won by O.
    pub wins_o: u32,
    /// Drawn games.
    pub draws: u32,
}

impl ScoreRecord {
    /// Tallies a terminal result. Non-terminal results are ignored.
    pub fn record(&mut self, result: &GameResult) {
        match result {
            GameResult::Won {
                player: Player::X, ..
            } => self.wins_x += 1,
            GameResult::Won {
                player: Player::O, ..
            } => self.wins_o += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::InProgress => {}
        }
    }

    /// Resets all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total games recorded.
    pub fn total(&self) -> u32 {
        self.wins_x + self.wins_o + self.draws
    }
}

/// Error raised while saving the score record.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ScoreError {
    /// Filesystem failure.
    #[display("Score file I/O error: {}", _0)]
    Io(std::io::Error),
    /// Serialization failure.
    #[display("Score serialization error: {}", _0)]
    Serialize(serde_json::Error),
}

/// Loads and saves the score record at a fixed path.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Creates a store backed by the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the record, falling back to defaults.
    ///
    /// A missing file is the normal first-run case; a corrupt file is
    /// logged and replaced by defaults on the next save.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> ScoreRecord {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No score file yet; starting fresh");
                return ScoreRecord::default();
            }
            Err(err) => {
                warn!(error = %err, "Failed to read score file; starting fresh");
                return ScoreRecord::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(record) => record,
            Err(err) => {
                warn!(error = %err, "Score file is corrupt; starting fresh");
                ScoreRecord::default()
            }
        }
    }

    /// Saves the record.
    #[instrument(skip(self, record), fields(path = %self.path.display()))]
    pub fn save(&self, record: &ScoreRecord) -> Result<(), ScoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(record)?;
        std::fs::write(&self.path, contents)?;
        debug!("Score record saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Triple;

    #[test]
    fn test_record_tallies_outcomes() {
        let mut record = ScoreRecord::default();
        record.record(&GameResult::Won {
            player: Player::X,
            triple: Triple::ALL[0],
        });
        record.record(&GameResult::Draw);
        record.record(&GameResult::InProgress);

        assert_eq!(record.wins_x, 1);
        assert_eq!(record.wins_o, 0);
        assert_eq!(record.draws, 1);
        assert_eq!(record.total(), 2);
    }

    #[test]
    fn test_missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("scores.json"));
        assert_eq!(store.load(), ScoreRecord::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("scores.json"));

        let record = ScoreRecord {
            wins_x: 3,
            wins_o: 1,
            draws: 2,
        };
        store.save(&record).unwrap();
        assert_eq!(store.load(), record);
    }

    #[test]
    fn test_corrupt_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        std::fs::write(&path, "not json").unwrap();

        let store = ScoreStore::new(path);
        assert_eq!(store.load(), ScoreRecord::default());
    }
}
