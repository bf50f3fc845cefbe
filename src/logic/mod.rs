//! Tournament business logic: scoring engine and lifecycle transitions.

mod play;
pub mod scoring;
mod setup;

pub use play::{abandon_to_setup, finish_tournament, record_score};
pub use scoring::{
    back_nine, final_score_to_par, final_standing_strokes, format_score_to_par, front_nine,
    player_progress, rank_by_final, rank_by_progress, rank_players, recorded_strokes,
    score_bucket, score_distribution, score_term, DisplayBucket, PlayerProgress,
    ScoreDistribution, ScoreTerm,
};
pub use setup::{reset_tournament, start_tournament};
