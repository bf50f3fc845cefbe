//! Tournament root state and TournamentStatus.

use crate::models::course::{CourseType, Hole};
use crate::models::player::{Player, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// Cannot start with an empty roster.
    NoPlayers,
    /// Player name is empty (after trimming).
    EmptyPlayerName,
    /// A player with this name already exists (names are unique, case-insensitive).
    DuplicatePlayerName,
    /// Player not found in the roster.
    PlayerNotFound(PlayerId),
    /// Hole number is not part of the course.
    HoleOutOfRange(u32),
    /// Strokes must be at least 1.
    ZeroStrokes,
    /// Par must be at least 1.
    ZeroPar,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::NoPlayers => write!(f, "Need at least 1 player to start"),
            TournamentError::EmptyPlayerName => write!(f, "Player name cannot be empty"),
            TournamentError::DuplicatePlayerName => {
                write!(f, "A player with this name already exists")
            }
            TournamentError::PlayerNotFound(_) => write!(f, "Player not found"),
            TournamentError::HoleOutOfRange(n) => write!(f, "Hole {} is not on the course", n),
            TournamentError::ZeroStrokes => write!(f, "Strokes must be at least 1"),
            TournamentError::ZeroPar => write!(f, "Par must be at least 1"),
        }
    }
}

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    /// Adding players, configuring the course; not started.
    #[default]
    Setup,
    /// Scores are being recorded hole by hole.
    Playing,
    /// Final scorecard; display only.
    Finished,
}

/// Full tournament state: phase, roster, and course.
///
/// In `Setup` the course is an editable draft (possibly empty) and the
/// roster is open. From `Playing` on, both are frozen and only score
/// entries mutate.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub status: TournamentStatus,
    /// Registration order; ids unique, names unique case-insensitive.
    pub players: Vec<Player>,
    pub course_type: CourseType,
    pub course: Vec<Hole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new()
    }
}

impl Tournament {
    /// Create a fresh tournament in Setup with no players and an empty course draft.
    pub fn new() -> Self {
        Self {
            status: TournamentStatus::Setup,
            players: Vec::new(),
            course_type: CourseType::Nine,
            course: Vec::new(),
            started_at: None,
            finished_at: None,
        }
    }

    /// Mutable reference to a player by id.
    pub fn get_player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Shared reference to a player by id.
    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Whether a hole number is part of the current course.
    pub fn has_hole(&self, hole_number: u32) -> bool {
        self.course.iter().any(|h| h.number == hole_number)
    }

    /// Add a player to the roster (Setup only). Names must be non-empty and
    /// unique (case-insensitive); leading/trailing whitespace is trimmed.
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        photo_url: Option<String>,
        handicap: Option<i32>,
    ) -> Result<PlayerId, TournamentError> {
        if self.status != TournamentStatus::Setup {
            return Err(TournamentError::InvalidState);
        }
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        let is_duplicate = self
            .players
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(TournamentError::DuplicatePlayerName);
        }
        let mut player = Player::new(name_trimmed);
        player.photo_url = photo_url;
        player.handicap = handicap;
        let id = player.id;
        self.players.push(player);
        Ok(id)
    }

    /// Remove a player by id (Setup only).
    pub fn remove_player(&mut self, player_id: PlayerId) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Setup {
            return Err(TournamentError::InvalidState);
        }
        let idx = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(TournamentError::PlayerNotFound(player_id))?;
        self.players.remove(idx);
        Ok(())
    }

    /// Switch between 9 and 18 holes (Setup only). Resets the course draft
    /// to the default par preset for the new type.
    pub fn set_course_type(&mut self, course_type: CourseType) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Setup {
            return Err(TournamentError::InvalidState);
        }
        self.course_type = course_type;
        self.course = course_type.default_course();
        Ok(())
    }

    /// Edit one hole's par in the course draft (Setup only).
    pub fn set_hole_par(&mut self, hole_number: u32, par: u32) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Setup {
            return Err(TournamentError::InvalidState);
        }
        if par == 0 {
            return Err(TournamentError::ZeroPar);
        }
        let hole = self
            .course
            .iter_mut()
            .find(|h| h.number == hole_number)
            .ok_or(TournamentError::HoleOutOfRange(hole_number))?;
        hole.par = par;
        Ok(())
    }
}
