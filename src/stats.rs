//! Play counts and high scores, persisted as JSON.
//!
//! The file maps a game name to its record:
//!
//! ```json
//! {
//!   "SevensOut": { "NumberOfPlays": 2, "HighScore": 20 }
//! }
//! ```
//!
//! Failures while loading or saving are reported to the player and logged,
//! never fatal: the in-memory statistics keep whatever they held before.

use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Statistics file used when none is configured.
pub const DEFAULT_STATS_FILE: &str = "GameStatistics.json";

/// Record kept for one game type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    #[serde(rename = "NumberOfPlays", default)]
    pub play_count: u32,
    #[serde(rename = "HighScore", default)]
    pub high_score: u32,
}

impl GameStats {
    /// Count one more completed play and keep the best of both totals.
    pub fn record(&mut self, totals: [u32; 2]) {
        self.play_count = self.play_count.saturating_add(1);
        self.high_score = self.high_score.max(totals[0]).max(totals[1]);
    }
}

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to read statistics from {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write statistics to {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("statistics file {} is malformed: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to encode statistics: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Statistics store bound to a file. Every update is written back at once.
#[derive(Debug, Clone)]
pub struct Statistics {
    path: PathBuf,
    games: BTreeMap<String, GameStats>,
}

impl Statistics {
    /// Bind to `path` and load whatever it holds. A missing file starts empty;
    /// an unreadable one is reported and also starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut stats = Self {
            path: path.into(),
            games: BTreeMap::new(),
        };
        let path = stats.path.clone();
        if let Err(err) = stats.load(&path) {
            report(&err);
        }
        stats
    }

    /// Replace the in-memory records with the contents of `path`.
    ///
    /// Returns `Ok(false)` when the file does not exist. On error the current
    /// records are left untouched.
    pub fn load(&mut self, path: &Path) -> Result<bool, StatsError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no statistics file yet");
                return Ok(false);
            }
            Err(source) => {
                return Err(StatsError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let games: BTreeMap<String, GameStats> =
            serde_json::from_str(&text).map_err(|source| StatsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = %path.display(), games = games.len(), "loaded statistics");
        self.games = games;
        Ok(true)
    }

    /// Write every record to `path` as indented JSON.
    pub fn save(&self, path: &Path) -> Result<(), StatsError> {
        let json = serde_json::to_string_pretty(&self.games)?;
        fs::write(path, json).map_err(|source| StatsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "saved statistics");
        Ok(())
    }

    /// Record for `game_type`, zeroed when the game was never played.
    pub fn get(&self, game_type: &str) -> GameStats {
        self.games.get(game_type).copied().unwrap_or_default()
    }

    /// All stored records, ordered by game name.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &GameStats)> {
        self.games.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Count a completed play of `game_type` with the given final totals and
    /// persist straight away. A failed save is reported, not returned.
    pub fn update(&mut self, game_type: &str, totals: [u32; 2]) -> GameStats {
        let entry = self.games.entry(game_type.to_string()).or_default();
        entry.record(totals);
        let updated = *entry;

        info!(
            game = game_type,
            plays = updated.play_count,
            high_score = updated.high_score,
            "updated statistics"
        );

        if let Err(err) = self.save(&self.path) {
            report(&err);
        }
        updated
    }
}

fn report(err: &StatsError) {
    warn!(error = %err, "statistics I/O failed");
    eprintln!("{} {}", "Error:".red().bold(), err);
}
