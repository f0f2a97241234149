//! Mutation error types.

use scribe_core::StorageError;
use scribe_precept::EvalError;
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur during mutation execution.
///
/// Storage errors pass through unchanged; no retry happens at this layer.
#[derive(Debug, Error)]
pub enum MutationError {
    /// A precept failed to evaluate. The mutation is abandoned, no commit
    /// is attempted.
    #[error("precept evaluation failed: {0}")]
    Eval(#[from] EvalError),

    /// The storage collaborator rejected the existence check or commit.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
