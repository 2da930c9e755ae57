//! Scoring error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoringError>;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Invalid analyze request: {0}")]
    InvalidArgument(String),

    #[error("Scoring service unavailable: {0}")]
    Unavailable(String),

    #[error("Scoring service timed out: {0}")]
    Timeout(String),

    #[error("Scoring service returned an unreadable body: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("Scoring service error [{status}]: {body}")]
    Status { status: u16, body: String },

    #[error("HTTP client configuration error: {0}")]
    Config(String),
}

impl ScoringError {
    /// Classify a transport-level reqwest failure.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ScoringError::Timeout(err.to_string())
        } else {
            ScoringError::Unavailable(err.to_string())
        }
    }
}
