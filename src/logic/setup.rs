//! Setup phase: start the tournament, and reset a finished one.

use crate::models::{Tournament, TournamentError, TournamentStatus};
use chrono::Utc;

/// Start the tournament (Setup -> Playing). Requires at least one player.
///
/// The course draft is adopted as-is; if it was never configured, the
/// default par preset for the current course type is used. Roster and
/// course are frozen from here on.
pub fn start_tournament(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::Setup {
        return Err(TournamentError::InvalidState);
    }
    if tournament.players.is_empty() {
        return Err(TournamentError::NoPlayers);
    }
    if tournament.course.is_empty() {
        tournament.course = tournament.course_type.default_course();
    }
    tournament.status = TournamentStatus::Playing;
    tournament.started_at = Some(Utc::now());
    Ok(())
}

/// Discard a finished tournament and return to an empty Setup
/// (Finished -> Setup). The caller is responsible for clearing any
/// persisted state alongside this.
pub fn reset_tournament(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::Finished {
        return Err(TournamentError::InvalidState);
    }
    *tournament = Tournament::new();
    Ok(())
}
