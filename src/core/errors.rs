//! Shared error types for the crate

use thiserror::Error;

/// Main error type for riskmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// Validation errors (out-of-range ratings, rejected mutations)
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
