//! Pure scoring computations: per-hole terms, progress, final standings, ranking.
//!
//! Two different totals exist and must not be merged: the live leaderboard
//! (`player_progress`) ignores unplayed holes entirely, while the finished
//! scorecard (`final_standing_strokes`) counts an unplayed hole as par so
//! the final ranking stays fully ordered even with incomplete cards.

use crate::models::{Hole, Player};
use serde::{Deserialize, Serialize};

/// Colloquial golf label for a single played hole.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTerm {
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogeyPlus,
}

impl std::fmt::Display for ScoreTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ScoreTerm::Albatross => "Albatross",
            ScoreTerm::Eagle => "Eagle",
            ScoreTerm::Birdie => "Birdie",
            ScoreTerm::Par => "Par",
            ScoreTerm::Bogey => "Bogey",
            ScoreTerm::DoubleBogey => "Double Bogey",
            ScoreTerm::TripleBogeyPlus => "Triple Bogey+",
        };
        write!(f, "{}", label)
    }
}

/// Coarser classification used for visual styling. Collapses Albatross
/// into EagleOrBetter and everything from double bogey up into one bucket;
/// intentionally not the same granularity as [`ScoreTerm`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayBucket {
    Unplayed,
    EagleOrBetter,
    Birdie,
    Par,
    Bogey,
    DoubleBogeyOrWorse,
}

/// Classify a played hole by strokes relative to par.
pub fn score_term(par: u32, strokes: u32) -> ScoreTerm {
    let diff = strokes as i32 - par as i32;
    match diff {
        d if d <= -3 => ScoreTerm::Albatross,
        -2 => ScoreTerm::Eagle,
        -1 => ScoreTerm::Birdie,
        0 => ScoreTerm::Par,
        1 => ScoreTerm::Bogey,
        2 => ScoreTerm::DoubleBogey,
        _ => ScoreTerm::TripleBogeyPlus,
    }
}

/// Classify a hole (played or not) into its display bucket.
pub fn score_bucket(par: u32, strokes: Option<u32>) -> DisplayBucket {
    let strokes = match strokes {
        Some(s) => s,
        None => return DisplayBucket::Unplayed,
    };
    let diff = strokes as i32 - par as i32;
    match diff {
        d if d <= -2 => DisplayBucket::EagleOrBetter,
        -1 => DisplayBucket::Birdie,
        0 => DisplayBucket::Par,
        1 => DisplayBucket::Bogey,
        _ => DisplayBucket::DoubleBogeyOrWorse,
    }
}

/// Format a score relative to par: "E" for even, "+N" over, "-N" under.
pub fn format_score_to_par(score: i32) -> String {
    if score == 0 {
        "E".to_string()
    } else if score > 0 {
        format!("+{}", score)
    } else {
        score.to_string()
    }
}

/// A player's live totals over the holes they have actually played.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerProgress {
    pub total_strokes: u32,
    pub holes_played: u32,
    /// Strokes minus par, over played holes only.
    pub score_to_par: i32,
}

/// Live totals for a player: only holes with a recorded score count,
/// on both the stroke side and the par side.
pub fn player_progress(player: &Player, course: &[Hole]) -> PlayerProgress {
    let mut total_strokes = 0u32;
    let mut par_so_far = 0u32;
    let mut holes_played = 0u32;
    for hole in course {
        if let Some(strokes) = player.strokes_on(hole.number) {
            total_strokes += strokes;
            par_so_far += hole.par;
            holes_played += 1;
        }
    }
    PlayerProgress {
        total_strokes,
        holes_played,
        score_to_par: total_strokes as i32 - par_so_far as i32,
    }
}

/// Final-scorecard stroke total: an unplayed hole counts as par.
pub fn final_standing_strokes(player: &Player, course: &[Hole]) -> u32 {
    course
        .iter()
        .map(|h| player.strokes_on(h.number).unwrap_or(h.par))
        .sum()
}

/// Final-scorecard score to par (final standing strokes minus total course par).
pub fn final_score_to_par(player: &Player, course: &[Hole]) -> i32 {
    let total_par: u32 = course.iter().map(|h| h.par).sum();
    final_standing_strokes(player, course) as i32 - total_par as i32
}

/// Rank players ascending on the given metric (lower is better).
/// The sort is stable: ties keep registration order.
pub fn rank_players<M>(players: &[Player], metric: M) -> Vec<&Player>
where
    M: Fn(&Player) -> i32,
{
    let mut ranked: Vec<&Player> = players.iter().collect();
    ranked.sort_by_key(|p| metric(p));
    ranked
}

/// Live leaderboard order: played-holes-only score to par.
pub fn rank_by_progress<'a>(players: &'a [Player], course: &[Hole]) -> Vec<&'a Player> {
    rank_players(players, |p| player_progress(p, course).score_to_par)
}

/// Final scorecard order: assume-par score to par.
pub fn rank_by_final<'a>(players: &'a [Player], course: &[Hole]) -> Vec<&'a Player> {
    rank_players(players, |p| final_score_to_par(p, course))
}

/// The front nine (holes 1-9, or the whole course if shorter).
pub fn front_nine(course: &[Hole]) -> &[Hole] {
    &course[..course.len().min(9)]
}

/// The back nine (holes 10-18); empty for a 9-hole course.
pub fn back_nine(course: &[Hole]) -> &[Hole] {
    if course.len() > 9 {
        &course[9..]
    } else {
        &[]
    }
}

/// Stroke total over a subset of holes, counting only recorded scores.
/// Used for the per-nine totals column of the scorecard grid.
pub fn recorded_strokes(player: &Player, holes: &[Hole]) -> u32 {
    holes
        .iter()
        .filter_map(|h| player.strokes_on(h.number))
        .sum()
}

/// How many holes fell into each scoring bracket, over played holes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    pub eagle_or_better: u32,
    pub birdies: u32,
    pub pars: u32,
    pub bogeys: u32,
    pub double_bogeys: u32,
    pub triple_or_worse: u32,
}

/// Count played holes per scoring bracket for a player's stats view.
pub fn score_distribution(player: &Player, course: &[Hole]) -> ScoreDistribution {
    let mut dist = ScoreDistribution::default();
    for hole in course {
        let strokes = match player.strokes_on(hole.number) {
            Some(s) => s,
            None => continue,
        };
        let diff = strokes as i32 - hole.par as i32;
        match diff {
            d if d <= -2 => dist.eagle_or_better += 1,
            -1 => dist.birdies += 1,
            0 => dist.pars += 1,
            1 => dist.bogeys += 1,
            2 => dist.double_bogeys += 1,
            _ => dist.triple_or_worse += 1,
        }
    }
    dist
}
