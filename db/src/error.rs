//! Database error types.

use thiserror::Error;

/// Database errors.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Precept string rejected at parse time.
    #[error("precept parse error: {0}")]
    Parse(#[from] scribe_precept::ParseError),

    /// Mutation execution failed.
    #[error("mutation error: {0}")]
    Mutation(#[from] scribe_mutation::MutationError),

    /// Storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] scribe_core::StorageError),

    /// Ranking configuration rejected by validation.
    #[error("ranking config error: {0}")]
    Ranking(#[from] scribe_ranking::RankingError),
}

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
