//! Error types for entry submission.

use thiserror::Error;

/// Result type for submission operations.
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Errors that can occur while posting an entry.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Transport-level failure: connect, timeout, or receipt decode.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server rejected entry ({status}): {body}")]
    Rejected { status: u16, body: String },
}
