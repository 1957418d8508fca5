//! Match results and win-count rankings for a league of teams

mod core;
mod errors;
mod team;

pub use self::core::{League, MatchOutcome};
pub use errors::LeagueError;
pub use team::Team;
