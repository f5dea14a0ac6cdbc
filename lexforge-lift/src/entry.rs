//! Entry assembly: the top of the serialization pipeline.

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use lexforge_form::entry_from_form;
use lexforge_model::Entry;

use crate::elements::{
    annotation_element, etymology_element, form_elements, grammatical_info_element, non_empty,
    note_elements, pronunciation_element, relation_element, trait_element, variant_element,
};
use crate::error::{LiftError, LiftResult};
use crate::ids::generate_entry_id;
use crate::sense::build_sense;
use crate::xml::{write_fragment, XmlElement};
use crate::LIFT_NAMESPACE;

/// Serialize a typed entry to a LIFT `<entry>` fragment.
///
/// The entry must have at least one non-empty lexical-unit text. The `id`
/// passes through when the caller supplied one; otherwise a fresh
/// `new-entry-` id is generated. `guid` and `dateCreated` pass through
/// verbatim; `dateModified` is regenerated on every call. The input is
/// never mutated.
pub fn serialize_entry(entry: &Entry) -> LiftResult<String> {
    write_fragment(&build_entry(entry)?)
}

/// Serialize raw saved-form JSON in one step: canonicalize, decode, build.
pub fn serialize_entry_value(form: Value) -> LiftResult<String> {
    let entry = entry_from_form(form)?;
    serialize_entry(&entry)
}

/// Child order is fixed: lexical-unit, grammatical-info, morph-type
/// trait, pronunciations, variants, relations, etymologies, notes,
/// senses, annotations.
fn build_entry(entry: &Entry) -> LiftResult<XmlElement> {
    if !entry.lexical_unit.has_text() {
        return Err(LiftError::EmptyLexicalUnit);
    }

    let id = entry
        .id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(generate_entry_id);

    let mut el = XmlElement::new("entry")
        .with_attr("xmlns", LIFT_NAMESPACE)
        .with_attr("id", id)
        .with_opt_attr("guid", non_empty(&entry.guid))
        .with_opt_attr("dateCreated", non_empty(&entry.date_created))
        .with_attr("dateModified", modification_timestamp());

    el.push_child(
        XmlElement::new("lexical-unit").with_children(form_elements(&entry.lexical_unit)),
    );
    if let Some(info) = entry.grammatical_info.as_ref().and_then(grammatical_info_element) {
        el.push_child(info);
    }
    if let Some(morph) = non_empty(&entry.morph_type) {
        el.push_child(trait_element("morph-type", morph));
    }
    for pronunciation in &entry.pronunciations {
        el.push_child(pronunciation_element(pronunciation));
    }
    for variant in &entry.variants {
        el.push_child(variant_element(variant));
    }
    for relation in &entry.relations {
        el.push_child(relation_element(relation)?);
    }
    for etymology in &entry.etymologies {
        el.push_child(etymology_element(etymology)?);
    }
    for note in note_elements(&entry.notes) {
        el.push_child(note);
    }
    for (idx, sense) in entry.senses.iter().enumerate() {
        el.push_child(build_sense(sense, idx)?);
    }
    for annotation in &entry.annotations {
        el.push_child(annotation_element(annotation));
    }
    Ok(el)
}

/// RFC 3339 UTC with millisecond precision, e.g. `2024-03-01T12:30:00.000Z`.
fn modification_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
