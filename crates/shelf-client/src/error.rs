//! Error types for catalog requests.

use thiserror::Error;

/// Errors that can occur while talking to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The client could not be built from its configuration.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The catalog answered with a non-success status.
    #[error("catalog returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The credential provider returned a token that cannot be sent.
    #[error("invalid credentials: {0}")]
    Credentials(String),

    /// An admin command is missing a required field.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
}

impl ClientError {
    /// Returns a user-friendly error message suitable for the error banner.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) | Self::Timeout => {
                "Could not reach the catalog. Please check your connection."
            }
            Self::Status { status, .. } if *status >= 500 => {
                "The catalog is having trouble right now. Please try again later."
            }
            Self::Status { .. } => "The catalog rejected the request.",
            Self::Credentials(_) => "Your credentials could not be attached to the request.",
            Self::MissingField(_) => "Please fill in all required fields.",
            Self::InvalidConfig(_) => "The catalog address is not configured correctly.",
        }
    }

    /// Returns whether this error is potentially recoverable with a retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Result type alias for catalog requests.
pub type Result<T> = std::result::Result<T, ClientError>;
