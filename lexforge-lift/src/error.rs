//! Error types for LIFT serialization.

use thiserror::Error;

/// Result type for serialization operations.
pub type LiftResult<T> = Result<T, LiftError>;

/// Errors that can occur while building or writing LIFT XML.
///
/// Only [`LiftError::EmptyLexicalUnit`] and
/// [`LiftError::MissingRequiredField`] occur in normal operation; the
/// rest indicate a writer or intake failure.
#[derive(Debug, Error)]
pub enum LiftError {
    /// The entry has no lexical-unit text in any language.
    #[error("entry has no lexical unit; at least one non-empty language form is required")]
    EmptyLexicalUnit,

    /// A required attribute was never filled in on the form.
    #[error("missing required field `{field}` on <{element}>")]
    MissingRequiredField {
        element: &'static str,
        field: &'static str,
    },

    /// Raw form data could not be decoded into the entry model.
    #[error("form intake error: {0}")]
    Form(#[from] lexforge_form::FormError),

    /// XML writer error.
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Writer output was not valid UTF-8.
    #[error("serialized XML was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
