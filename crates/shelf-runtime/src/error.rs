//! Error types for the runtime.

use thiserror::Error;

/// Errors returned by [`SearchHandle`](crate::SearchHandle).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RuntimeError {
    /// The event loop has stopped and no longer accepts input.
    #[error("search runtime is no longer running")]
    Closed,

    /// The event loop task panicked or was cancelled.
    #[error("search runtime task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Result type for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;
