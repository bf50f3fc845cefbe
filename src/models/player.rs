//! Player data structure with the sparse per-hole score map.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Unique identifier for a player (used in score entry and lookups).
pub type PlayerId = Uuid;

/// A participant in the tournament.
///
/// `scores` maps hole number to recorded strokes. A missing key means the
/// hole has not been played yet; a recorded value is always at least 1.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Optional photo (opaque reference, e.g. a data URL from the frontend).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handicap: Option<i32>,
    #[serde(default)]
    pub scores: HashMap<u32, u32>,
}

impl Player {
    /// Create a new player with the given name and an empty score map.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            photo_url: None,
            handicap: None,
            scores: HashMap::new(),
        }
    }

    /// Strokes recorded on a hole, or None if not yet played.
    pub fn strokes_on(&self, hole_number: u32) -> Option<u32> {
        self.scores.get(&hole_number).copied()
    }

    /// Record (or overwrite) the strokes for a hole.
    pub fn record_strokes(&mut self, hole_number: u32, strokes: u32) {
        self.scores.insert(hole_number, strokes);
    }
}
