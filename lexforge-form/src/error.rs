//! Error types for form intake.

use thiserror::Error;

/// Result type for form intake operations.
pub type FormResult<T> = Result<T, FormError>;

/// Errors that can occur while decoding saved form data.
#[derive(Debug, Error)]
pub enum FormError {
    /// The top-level form value was not a JSON object.
    #[error("form data is not an object")]
    NotAnObject,

    /// The canonicalized form data did not fit the entry model.
    #[error("form decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
