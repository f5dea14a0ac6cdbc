//! HTTP submission of serialized entries.
//!
//! The serialization engine produces a LIFT fragment; this crate gets it
//! to the curation backend: one `POST` per save, body = the fragment,
//! content type `application/xml`. The server answers with a JSON receipt
//! carrying the entry's canonical id (for a `new-entry-` submission that
//! id replaces the client-temporary one).
//!
//! One call is one attempt. Retry and backoff policy belongs to the
//! caller, not here.

mod client;
mod error;

pub use client::{SaveReceipt, SubmitClient, SubmitConfig};
pub use error::{SubmitError, SubmitResult};
