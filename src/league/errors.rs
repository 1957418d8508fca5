use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeagueError {
    #[error("Unknown team: {0}")]
    UnknownTeam(String),
}
