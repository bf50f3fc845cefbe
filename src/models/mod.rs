//! Data structures for the golf tournament: course, players, tournament state.

mod course;
mod player;
mod tournament;

pub use course::{build_course, CourseError, CourseType, Hole, DEFAULT_PARS_18, DEFAULT_PARS_9};
pub use player::{Player, PlayerId};
pub use tournament::{Tournament, TournamentError, TournamentStatus};
