//! Core LIFT entry model for LexForge.
//!
//! Defines the value types the serialization engine consumes:
//! - [`Entry`]: one dictionary entry with its headword and compound collections
//! - [`Sense`]: a sense or subsense (same shape, recursive)
//! - [`MultiText`]: a language-tagged text map in document order
//! - [`GrammaticalInfo`]: part-of-speech, either a bare string or a detailed object
//!
//! These are plain values with no identity beyond their `id` strings and no
//! IO. The form layer produces them from saved form data; the LIFT layer
//! turns them into XML. Nothing here mutates an entry after construction.

mod entry;
mod grammar;
mod sense;
mod text;

pub use entry::{Annotation, Entry, Etymology, Media, Pronunciation, Relation, Variant};
pub use grammar::GrammaticalInfo;
pub use sense::{Example, Illustration, Reversal, Sense};
pub use text::MultiText;
