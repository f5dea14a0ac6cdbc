//! Entry intake: canonicalization of raw form JSON and decode into the model.

use serde_json::{Map, Value};

use lexforge_model::Entry;

use crate::error::{FormError, FormResult};
use crate::normalize::{is_unsafe_key, normalize_indexed};

/// Alias pairs at entry level. The camelCase spelling wins when both occur.
const ENTRY_ALIASES: [(&str, &str); 5] = [
    ("lexicalUnit", "lexical_unit"),
    ("grammaticalInfo", "grammatical_info"),
    ("morphType", "morph_type"),
    ("dateCreated", "date_created"),
    ("dateModified", "date_modified"),
];

const ENTRY_COLLECTIONS: [&str; 6] = [
    "pronunciations",
    "variants",
    "relations",
    "etymologies",
    "senses",
    "annotations",
];

const SENSE_ALIASES: [(&str, &str); 5] = [
    ("grammaticalInfo", "grammatical_info"),
    ("definitions", "definition"),
    ("domainType", "domain_type"),
    ("semanticDomain", "semantic_domain"),
    ("usageType", "usage_type"),
];

const SENSE_COLLECTIONS: [&str; 6] = [
    "examples",
    "relations",
    "subsenses",
    "reversals",
    "annotations",
    "illustrations",
];

/// Decode saved form data into a typed [`Entry`].
///
/// The value is canonicalized in place first, so one call accepts every
/// shape the entry form has ever saved.
pub fn entry_from_form(mut value: Value) -> FormResult<Entry> {
    if !value.is_object() {
        return Err(FormError::NotAnObject);
    }
    canonicalize_entry(&mut value);
    Ok(serde_json::from_value(value)?)
}

/// Rewrite raw form JSON into the canonical entry shape.
///
/// Scrubs prototype-pollution keys at every level, drops null fields,
/// folds snake_case aliases into their camelCase spellings, and runs
/// [`normalize_indexed`] over every indexed collection, recursing through
/// senses, subsenses, and reversals.
pub fn canonicalize_entry(value: &mut Value) {
    scrub_unsafe_keys(value);
    let Some(map) = value.as_object_mut() else {
        return;
    };
    drop_null_fields(map);
    for (canonical, alias) in ENTRY_ALIASES {
        fold_alias(map, canonical, alias);
    }
    for field in ENTRY_COLLECTIONS {
        normalize_collection(map, field);
    }
    for_each_in(map, "pronunciations", canonicalize_pronunciation);
    for_each_in(map, "variants", canonicalize_flat);
    for_each_in(map, "relations", canonicalize_flat);
    for_each_in(map, "etymologies", canonicalize_flat);
    for_each_in(map, "annotations", canonicalize_flat);
    for_each_in(map, "senses", canonicalize_sense);
}

fn canonicalize_sense(value: &mut Value) {
    let Some(map) = value.as_object_mut() else {
        return;
    };
    drop_null_fields(map);
    for (canonical, alias) in SENSE_ALIASES {
        fold_alias(map, canonical, alias);
    }
    for field in SENSE_COLLECTIONS {
        normalize_collection(map, field);
    }
    for_each_in(map, "examples", canonicalize_flat);
    for_each_in(map, "relations", canonicalize_flat);
    for_each_in(map, "annotations", canonicalize_flat);
    for_each_in(map, "illustrations", canonicalize_flat);
    for_each_in(map, "reversals", canonicalize_reversal);
    for_each_in(map, "subsenses", canonicalize_sense);
}

fn canonicalize_pronunciation(value: &mut Value) {
    let Some(map) = value.as_object_mut() else {
        return;
    };
    drop_null_fields(map);
    fold_alias(map, "cvPattern", "cv_pattern");
    normalize_collection(map, "media");
    for_each_in(map, "media", canonicalize_flat);
}

fn canonicalize_reversal(value: &mut Value) {
    let Some(map) = value.as_object_mut() else {
        return;
    };
    drop_null_fields(map);
    fold_alias(map, "grammaticalInfo", "grammatical_info");
    if let Some(main) = map.get_mut("main") {
        canonicalize_reversal(main);
    }
}

/// Leaf canonicalization for structs with no aliases or nested collections.
fn canonicalize_flat(value: &mut Value) {
    if let Some(map) = value.as_object_mut() {
        drop_null_fields(map);
    }
}

fn for_each_in(map: &mut Map<String, Value>, field: &str, f: fn(&mut Value)) {
    if let Some(Value::Array(items)) = map.get_mut(field) {
        for item in items {
            f(item);
        }
    }
}

/// Null fields mean "never filled in"; the model treats them as absent.
fn drop_null_fields(map: &mut Map<String, Value>) {
    map.retain(|_, value| !value.is_null());
}

/// Keep the canonical spelling when both spellings are present.
fn fold_alias(map: &mut Map<String, Value>, canonical: &str, alias: &str) {
    if map.contains_key(canonical) {
        map.remove(alias);
    }
}

fn normalize_collection(map: &mut Map<String, Value>, field: &str) {
    if let Some(value) = map.remove(field) {
        map.insert(field.to_string(), Value::Array(normalize_indexed(value)));
    }
}

fn scrub_unsafe_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|key, _| !is_unsafe_key(key));
            for item in map.values_mut() {
                scrub_unsafe_keys(item);
            }
        }
        Value::Array(items) => {
            for item in items {
                scrub_unsafe_keys(item);
            }
        }
        _ => {}
    }
}
