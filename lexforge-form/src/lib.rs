//! Form-data normalization and intake.
//!
//! Saved entry forms arrive as loosely-shaped JSON: repeated sections keyed
//! by decimal string index ("0", "1", ...), camelCase and snake_case
//! spellings mixed across app versions, null fields, and occasionally keys
//! nobody should trust. This crate flattens all of that into the typed
//! model:
//! - [`normalize_indexed`]: index-keyed collection → ordered `Vec<Value>`
//! - [`canonicalize_entry`]: alias folding, null dropping, and collection
//!   normalization, applied recursively through senses and subsenses
//! - [`entry_from_form`]: the whole intake, producing a typed
//!   [`Entry`](lexforge_model::Entry)
//!
//! Nothing here touches the network or the DOM; relation rows collected
//! from the sense editor arrive already merged into the form value.

mod error;
mod intake;
mod normalize;

pub use error::{FormError, FormResult};
pub use intake::{canonicalize_entry, entry_from_form};
pub use normalize::normalize_indexed;
