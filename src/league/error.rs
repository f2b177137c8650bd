use thiserror::Error as ThisError;

use crate::models::fixture::DuplicateReport;

#[derive(Debug, ThisError)]
pub enum LeagueError {
    #[error("No fixtures could be generated: every selected group has fewer than 2 teams")]
    NoFixturesGenerated,

    #[error("{} of {} fixtures already exist", .0.existing, .0.total)]
    DuplicateConflict(DuplicateReport),

    #[error("Failed to persist fixture after {saved} were saved: {source}")]
    Persistence {
        saved: usize,
        #[source]
        source: sqlx::Error,
    },

    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl LeagueError {
    pub fn validation(message: impl Into<String>) -> Self {
        LeagueError::Validation(message.into())
    }
}
