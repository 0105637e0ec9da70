//! Save File Handling
//!
//! Persists the wallet, progressive pool and lifetime stats between runs:
//! - Pretty-printed JSON on disk
//! - Missing file starts a fresh game
//! - Unreadable file is reported back so the caller can warn before
//!   falling back to a fresh game
//! - Missing fields take defaults, unknown fields are ignored

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rb_engine::{DEFAULT_BALANCE, GameStats, JACKPOT_FLOOR, SlotMachine};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Save file errors
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// What [`SaveData::load_from`] found on disk.
#[derive(Debug)]
pub enum LoadedSave {
    /// An existing file parsed cleanly.
    Restored(SaveData),
    /// Nothing at the path yet.
    FirstRun,
    /// A file is present but cannot be read or parsed.
    Unreadable(SaveError),
}

/// Everything that survives between program runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    /// Wallet balance in whole dollars
    pub balance: u64,
    /// Progressive jackpot pool
    pub progressive_jackpot: u64,
    /// Lifetime statistics
    pub stats: GameStats,
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            balance: DEFAULT_BALANCE,
            progressive_jackpot: JACKPOT_FLOOR,
            stats: GameStats::default(),
        }
    }
}

impl SaveData {
    /// Snapshot of a live machine, ready to write out.
    pub fn from_machine(machine: &SlotMachine) -> Self {
        Self {
            balance: machine.balance(),
            progressive_jackpot: machine.jackpot(),
            stats: machine.stats().clone(),
        }
    }

    /// Load from `path`, reporting whether the data came from an existing
    /// file. A missing file is a first run; a file that cannot be read or
    /// parsed is handed back as [`LoadedSave::Unreadable`] with its cause.
    pub fn load_from<P: AsRef<Path>>(path: P) -> LoadedSave {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(data) => {
                    log::info!("loaded save from {}", path.display());
                    LoadedSave::Restored(data)
                }
                Err(e) => {
                    log::warn!(
                        "save file {} is unreadable ({e}), starting fresh",
                        path.display()
                    );
                    LoadedSave::Unreadable(e.into())
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no save file at {}, starting fresh", path.display());
                LoadedSave::FirstRun
            }
            Err(e) => {
                log::warn!(
                    "save file {} is unreadable ({e}), starting fresh",
                    path.display()
                );
                LoadedSave::Unreadable(e.into())
            }
        }
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), SaveError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("saved game state to {}", path.display());
        Ok(())
    }
}

/// Default save location: `<platform data dir>/reelbandit/save.json`.
pub fn default_save_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("reelbandit")
        .join("save.json")
}
