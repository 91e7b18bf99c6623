//! Save file handling
//!
//! One JSON document per player:
//!
//! ```text
//! { "balance": 100, "progressive_jackpot": 1000,
//!   "stats": { "total_spins": 0, "total_bet": 0, "total_winnings": 0,
//!              "biggest_win": 0, "jackpots_won": 0, "sessions_played": 0 } }
//! ```
//!
//! Missing or malformed keys fall back to defaults individually.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PersistenceError;
use crate::stats::GameStats;

/// Save file name
pub const SAVE_FILE_NAME: &str = "slot_machine_save.json";

/// Jackpot pool of a fresh save
pub const DEFAULT_JACKPOT: u64 = 1000;

/// Persisted game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    pub balance: u64,
    pub progressive_jackpot: u64,
    pub stats: GameStats,
}

impl SaveData {
    /// Fresh save with the given starting balance
    pub fn new(balance: u64, progressive_jackpot: u64) -> Self {
        Self {
            balance,
            progressive_jackpot,
            stats: GameStats::default(),
        }
    }

    /// Read a save document, falling back to `defaults` key by key
    pub fn from_value(value: &Value, defaults: &SaveData) -> Self {
        let stats = value.get("stats");
        let stat = |key: &str, fallback: u64| int_or(stats.and_then(|s| s.get(key)), fallback);
        let d = &defaults.stats;

        Self {
            balance: int_or(value.get("balance"), defaults.balance),
            progressive_jackpot: int_or(value.get("progressive_jackpot"), defaults.progressive_jackpot),
            stats: GameStats {
                total_spins: stat("total_spins", d.total_spins),
                total_bet: stat("total_bet", d.total_bet),
                total_winnings: stat("total_winnings", d.total_winnings),
                biggest_win: stat("biggest_win", d.biggest_win),
                jackpots_won: stat("jackpots_won", d.jackpots_won),
                sessions_played: stat("sessions_played", d.sessions_played),
            },
        }
    }
}

/// Non-negative integer value, or the fallback for anything else
fn int_or(value: Option<&Value>, fallback: u64) -> u64 {
    value.and_then(Value::as_u64).unwrap_or(fallback)
}

impl Default for SaveData {
    fn default() -> Self {
        Self::new(100, DEFAULT_JACKPOT)
    }
}

/// A save file on disk
#[derive(Debug, Clone)]
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Save file in the standard location
    pub fn at_default_path() -> Self {
        Self::new(Self::default_path())
    }

    /// Per-user data directory, or the working directory if none is known
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("reelforge"))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(SAVE_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the save; `Ok(None)` when no file exists yet
    pub fn try_load(&self, defaults: &SaveData) -> Result<Option<SaveData>, PersistenceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let value: Value = serde_json::from_str(&content)?;
        Ok(Some(SaveData::from_value(&value, defaults)))
    }

    /// Load the save, never failing
    pub fn load_or_default(&self, defaults: SaveData) -> SaveData {
        match self.try_load(&defaults) {
            Ok(Some(data)) => {
                info!("Loaded save from {}", self.path.display());
                data
            }
            Ok(None) => defaults,
            Err(e) => {
                warn!("Could not load save {}: {}, starting fresh", self.path.display(), e);
                defaults
            }
        }
    }

    /// Overwrite the save file
    pub fn save(&self, data: &SaveData) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, json)?;
        info!("Game saved to {}", self.path.display());
        Ok(())
    }
}
