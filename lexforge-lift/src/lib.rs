//! LIFT 0.13 XML serialization and validation.
//!
//! Turns a typed [`Entry`](lexforge_model::Entry) into one standalone
//! `<entry>` fragment in the LIFT 0.13 namespace, and structurally checks
//! fragments before they go anywhere:
//! - [`serialize_entry`] / [`serialize_entry_value`]: entry → XML string
//! - [`validate`]: XML string → [`ValidationReport`]; malformed input is
//!   reported as data, never raised
//! - [`XmlElement`]: the intermediate element tree the builders produce
//!
//! Output is a fragment: no XML declaration and no `<lift>` wrapper. The
//! server wraps fragments into full documents on its side. Everything in
//! this crate is pure and synchronous; callers on any number of threads
//! can serialize concurrently.

mod elements;
mod entry;
mod error;
mod ids;
mod sense;
mod validate;
mod xml;

pub use elements::{
    annotation_element, etymology_element, example_element, form_element, form_elements,
    gloss_elements, grammatical_info_element, illustration_element, note_elements,
    pronunciation_element, relation_element, reversal_element, trait_element, variant_element,
};
pub use entry::{serialize_entry, serialize_entry_value};
pub use error::{LiftError, LiftResult};
pub use ids::{generate_element_id, generate_entry_id, NEW_ENTRY_PREFIX};
pub use sense::build_sense;
pub use validate::{validate, IssueKind, ValidationIssue, ValidationReport};
pub use xml::{write_fragment, XmlElement, XmlNode};

/// The LIFT 0.13 namespace every serialized entry declares.
pub const LIFT_NAMESPACE: &str = "http://fieldworks.sil.org/schemas/lift/0.13";
