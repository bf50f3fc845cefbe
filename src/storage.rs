//! File-backed persistence for the single tournament slot.
//!
//! One tournament lives at a time, saved as JSON under a fixed key so a
//! restarted server picks the round back up. Loading degrades gracefully:
//! a missing or unreadable slot just means starting from a fresh Setup.

use crate::models::Tournament;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Fixed slot key; the on-disk file is `<dir>/golf_tournament_state.json`.
const SLOT_KEY: &str = "golf_tournament_state";

/// Errors from saving or clearing the tournament slot. Never fatal to the
/// in-memory tournament; callers log and carry on.
#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Serialize(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "Storage I/O error: {}", e),
            StorageError::Serialize(e) => write!(f, "Storage serialization error: {}", e),
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialize(e)
    }
}

/// Durable slot for the live tournament.
pub struct TournamentStore {
    path: PathBuf,
}

impl TournamentStore {
    /// Store the slot file inside `dir` (created on first save).
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", SLOT_KEY)),
        }
    }

    /// Path of the slot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved tournament. Missing or malformed data yields None;
    /// the caller falls back to a fresh Setup tournament.
    pub fn load(&self) -> Option<Tournament> {
        let data = match fs::read_to_string(&self.path) {
            Ok(d) => d,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("Could not read {}: {}", self.path.display(), e);
                return None;
            }
        };
        match serde_json::from_str(&data) {
            Ok(t) => Some(t),
            Err(e) => {
                log::warn!("Ignoring malformed save at {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Save the tournament. Writes to a temp file then renames, so a crash
    /// mid-write never leaves a truncated slot.
    pub fn save(&self, tournament: &Tournament) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let data = serde_json::to_string_pretty(tournament)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Discard the saved tournament. A slot that was never saved is fine.
    pub fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
