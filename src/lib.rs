//! Golf tournament scorekeeper: library with models, scoring engine, and lifecycle logic.

pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{
    abandon_to_setup, back_nine, final_score_to_par, final_standing_strokes, finish_tournament,
    format_score_to_par, front_nine, player_progress, rank_by_final, rank_by_progress,
    rank_players, record_score, recorded_strokes, reset_tournament, score_bucket,
    score_distribution, score_term, start_tournament, DisplayBucket, PlayerProgress,
    ScoreDistribution, ScoreTerm,
};
pub use models::{
    build_course, CourseError, CourseType, Hole, Player, PlayerId, Tournament, TournamentError,
    TournamentStatus, DEFAULT_PARS_18, DEFAULT_PARS_9,
};
pub use storage::{StorageError, TournamentStore};
