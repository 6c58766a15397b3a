//! Error types for parsing model values from text.

use thiserror::Error;

/// Errors raised when text does not name a known model value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// The name is not one of the sortable columns.
    #[error("unknown sort field '{0}' (expected title, author, publisher or year)")]
    UnknownSortField(String),

    /// The name is not a sort direction.
    #[error("unknown sort order '{0}' (expected asc or desc)")]
    UnknownSortOrder(String),
}

/// Result type alias for model parsing.
pub type Result<T> = std::result::Result<T, ModelError>;
