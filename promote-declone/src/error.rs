//! Error types for the de-cloning core.

use promote_storage::StorageError;
use thiserror::Error;

/// Result type for de-cloning operations.
pub type DecloneResult<T> = Result<T, DecloneError>;

/// Errors that abort a de-cloning call.
///
/// Unparseable or dangling clone references are not errors; they end the
/// affected chain early.
#[derive(Debug, Error)]
pub enum DecloneError {
    /// A repository call failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A merge worker panicked or was cancelled.
    #[error("merge task failed: {0}")]
    MergeTask(String),
}
