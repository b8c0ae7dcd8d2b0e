//! Error types for stack trace capture and serialization.

use thiserror::Error;

/// Errors that can occur while producing or serializing a stack trace.
///
/// Parsing contributes no variant here: a malformed fragment degrades to a
/// partially-empty frame instead of failing.
#[derive(Debug, Error)]
pub enum Error {
    /// The capture collaborator failed to extract raw frames.
    #[error("capture failed: {0}")]
    Capture(String),

    /// JSON serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Creates a capture error from any displayable cause.
    pub fn capture(cause: impl std::fmt::Display) -> Self {
        Self::Capture(cause.to_string())
    }
}

/// Result type alias for stack trace operations.
pub type Result<T> = std::result::Result<T, Error>;
