//! Playing phase: score entry, finishing, and abandoning.

use crate::models::{PlayerId, Tournament, TournamentError, TournamentStatus};
use chrono::Utc;

/// Record (or overwrite) a player's strokes for one hole (Playing only).
///
/// Guards are checked before anything mutates: unknown player, hole not on
/// the course, or zero strokes leave the tournament untouched. There is no
/// upper bound on strokes; clamping is a presentation concern.
pub fn record_score(
    tournament: &mut Tournament,
    player_id: PlayerId,
    hole_number: u32,
    strokes: u32,
) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::Playing {
        return Err(TournamentError::InvalidState);
    }
    if strokes == 0 {
        return Err(TournamentError::ZeroStrokes);
    }
    if !tournament.has_hole(hole_number) {
        return Err(TournamentError::HoleOutOfRange(hole_number));
    }
    let player = tournament
        .get_player_mut(player_id)
        .ok_or(TournamentError::PlayerNotFound(player_id))?;
    player.record_strokes(hole_number, strokes);
    Ok(())
}

/// End the round (Playing -> Finished). Scores freeze; the final scorecard
/// ranks with unplayed holes counted as par.
pub fn finish_tournament(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::Playing {
        return Err(TournamentError::InvalidState);
    }
    tournament.status = TournamentStatus::Finished;
    tournament.finished_at = Some(Utc::now());
    Ok(())
}

/// Abandon the round and return to an empty Setup (Playing -> Setup).
/// Roster, course, and all recorded scores are discarded.
pub fn abandon_to_setup(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::Playing {
        return Err(TournamentError::InvalidState);
    }
    *tournament = Tournament::new();
    Ok(())
}
