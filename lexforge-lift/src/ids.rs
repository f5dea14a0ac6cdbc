//! Generated identifiers for entries and elements.
//!
//! Uses UUID v7: the embedded timestamp keeps generated ids sortable by
//! creation time and the random tail keeps them collision-free.

use uuid::Uuid;

/// Prefix marking an entry id the client made up for a not-yet-saved
/// entry. The server recognizes it and assigns a canonical id on save.
pub const NEW_ENTRY_PREFIX: &str = "new-entry-";

/// Fresh id for an entry that has never been saved.
#[must_use]
pub fn generate_entry_id() -> String {
    format!("{NEW_ENTRY_PREFIX}{}", Uuid::now_v7())
}

/// Fresh id for a sense or other element that came without one.
#[must_use]
pub fn generate_element_id() -> String {
    Uuid::now_v7().to_string()
}
