use lexforge_model::{Entry, MultiText, Relation, Reversal, Sense};
use serde_json::json;

fn entry_from(value: serde_json::Value) -> Entry {
    serde_json::from_value(value).unwrap()
}

// ── Wire names & aliases ─────────────────────────────────────────

#[test]
fn camel_case_field_names_deserialize() {
    let e = entry_from(json!({
        "lexicalUnit": {"en": "mountain"},
        "morphType": "stem",
        "dateCreated": "2024-03-01T10:00:00.000Z"
    }));
    assert_eq!(e.lexical_unit.get("en"), Some("mountain"));
    assert_eq!(e.morph_type.as_deref(), Some("stem"));
    assert_eq!(e.date_created.as_deref(), Some("2024-03-01T10:00:00.000Z"));
}

#[test]
fn snake_case_aliases_deserialize() {
    let e = entry_from(json!({
        "lexical_unit": {"en": "mountain"},
        "morph_type": "stem",
        "date_modified": "2024-03-02T10:00:00.000Z"
    }));
    assert_eq!(e.lexical_unit.get("en"), Some("mountain"));
    assert_eq!(e.morph_type.as_deref(), Some("stem"));
    assert_eq!(e.date_modified.as_deref(), Some("2024-03-02T10:00:00.000Z"));
}

#[test]
fn serialization_prefers_camel_case() {
    let e = entry_from(json!({"lexical_unit": {"en": "hill"}, "morph_type": "root"}));
    let out = serde_json::to_value(&e).unwrap();
    assert!(out.get("lexicalUnit").is_some());
    assert!(out.get("lexical_unit").is_none());
    assert_eq!(out["morphType"], "root");
}

#[test]
fn relation_uses_type_and_ref_wire_names() {
    let r: Relation =
        serde_json::from_value(json!({"type": "synonym", "ref": "entry-42", "order": 3})).unwrap();
    assert_eq!(r.rel_type, "synonym");
    assert_eq!(r.target, "entry-42");
    assert_eq!(r.order.as_ref().map(|n| n.as_u64()), Some(Some(3)));

    let out = serde_json::to_value(&r).unwrap();
    assert_eq!(out["type"], "synonym");
    assert_eq!(out["ref"], "entry-42");
}

#[test]
fn sense_accepts_definition_singular_alias() {
    let s: Sense = serde_json::from_value(json!({"definition": {"en": "a large hill"}})).unwrap();
    assert_eq!(s.definitions.get("en"), Some("a large hill"));
}

// ── Defaults & missing fields ────────────────────────────────────

#[test]
fn empty_object_gives_default_entry() {
    let e = entry_from(json!({}));
    assert_eq!(e, Entry::default());
    assert!(e.lexical_unit.is_empty());
    assert!(e.senses.is_empty());
}

#[test]
fn missing_relation_fields_default_to_empty() {
    let r: Relation = serde_json::from_value(json!({})).unwrap();
    assert_eq!(r.rel_type, "");
    assert_eq!(r.target, "");
    assert!(r.order.is_none());
}

#[test]
fn empty_collections_are_skipped_on_serialization() {
    let out = serde_json::to_value(Entry::default()).unwrap();
    assert_eq!(out, json!({}));
}

// ── Recursion ────────────────────────────────────────────────────

#[test]
fn subsenses_nest_to_arbitrary_depth() {
    let s: Sense = serde_json::from_value(json!({
        "glosses": {"en": "outer"},
        "subsenses": [
            {"glosses": {"en": "inner"}, "subsenses": [{"glosses": {"en": "innermost"}}]}
        ]
    }))
    .unwrap();
    assert_eq!(s.subsenses[0].subsenses[0].glosses.get("en"), Some("innermost"));
}

#[test]
fn reversal_main_nests_through_box() {
    let r: Reversal = serde_json::from_value(json!({
        "forms": {"en": "child"},
        "main": {"forms": {"en": "parent"}, "main": {"forms": {"en": "grandparent"}}}
    }))
    .unwrap();
    let parent = r.main.as_deref().unwrap();
    let grandparent = parent.main.as_deref().unwrap();
    assert_eq!(grandparent.forms.get("en"), Some("grandparent"));
}

// ── Multitext order ──────────────────────────────────────────────

#[test]
fn notes_map_keeps_document_order() {
    let e = entry_from(json!({
        "lexicalUnit": {"en": "x"},
        "notes": {"general": "first", "anthropology": "second", "usage": "third"}
    }));
    let keys: Vec<_> = e.notes.keys().cloned().collect();
    assert_eq!(keys, vec!["general", "anthropology", "usage"]);
}

#[test]
fn multitext_round_trips_mixed_value_shapes() {
    let mt = MultiText::from_value(&json!({"en": {"text": "dog"}, "fr": "chien"}));
    let out = serde_json::to_value(&mt).unwrap();
    let back = MultiText::from_value(&out);
    let collected: Vec<_> = back.texts().collect();
    assert_eq!(collected, vec![("en", "dog"), ("fr", "chien")]);
}
