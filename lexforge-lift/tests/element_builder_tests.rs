use lexforge_lift::{
    annotation_element, etymology_element, example_element, form_elements, gloss_elements,
    grammatical_info_element, illustration_element, note_elements, pronunciation_element,
    relation_element, reversal_element, variant_element, write_fragment, LiftError, XmlElement,
};
use lexforge_model::{GrammaticalInfo, MultiText};
use pretty_assertions::assert_eq;
use serde_json::json;

fn render(el: XmlElement) -> String {
    write_fragment(&el).unwrap()
}

// ── Forms & glosses ──────────────────────────────────────────────

#[test]
fn form_elements_skip_untextual_values() {
    let texts = MultiText::from_value(&json!({
        "en": "word",
        "fr": "",
        "de": {"text": "Wort"},
        "it": 7
    }));
    let forms = form_elements(&texts);
    assert_eq!(forms.len(), 2);
    assert_eq!(render(forms[0].clone()), r#"<form lang="en"><text>word</text></form>"#);
    assert_eq!(render(forms[1].clone()), r#"<form lang="de"><text>Wort</text></form>"#);
}

#[test]
fn gloss_elements_use_the_gloss_tag() {
    let glosses = gloss_elements(&MultiText::of([("en", "house")]));
    assert_eq!(render(glosses[0].clone()), r#"<gloss lang="en"><text>house</text></gloss>"#);
}

// ── Grammatical info ─────────────────────────────────────────────

#[test]
fn grammatical_info_resolves_detailed_objects() {
    let info: GrammaticalInfo =
        serde_json::from_value(json!({"partOfSpeech": "Noun", "confidence": 2})).unwrap();
    let el = grammatical_info_element(&info).unwrap();
    assert_eq!(render(el), r#"<grammatical-info value="Noun"/>"#);
}

#[test]
fn unresolvable_grammatical_info_emits_nothing() {
    let info: GrammaticalInfo = serde_json::from_value(json!("")).unwrap();
    assert!(grammatical_info_element(&info).is_none());

    let info: GrammaticalInfo = serde_json::from_value(json!({})).unwrap();
    assert!(grammatical_info_element(&info).is_none());
}

// ── Pronunciation ────────────────────────────────────────────────

#[test]
fn pronunciation_carries_media_and_typed_fields() {
    let pronunciation = serde_json::from_value(json!({
        "forms": {"seh-fonipa": "ˈma.dzi"},
        "media": [{"href": "madzi.wav"}, {"href": ""}, {}],
        "cvPattern": {"seh-fonipa": "CVCV"},
        "tone": {"seh-fonipa": "high"}
    }))
    .unwrap();
    let xml = render(pronunciation_element(&pronunciation));

    assert!(xml.contains(r#"<media href="madzi.wav"/>"#));
    assert_eq!(xml.matches("<media").count(), 1);
    assert!(xml.contains(
        r#"<field type="cv-pattern"><form lang="seh-fonipa"><text>CVCV</text></form></field>"#
    ));
    assert!(xml.contains(
        r#"<field type="tone"><form lang="seh-fonipa"><text>high</text></form></field>"#
    ));
}

// ── Variant & relation ───────────────────────────────────────────

#[test]
fn variant_emits_ref_forms_and_traits() {
    let variant = serde_json::from_value(json!({
        "ref": "entry-main",
        "forms": {"en": "colour"},
        "traits": {"environment": "_British", "frequency": 2}
    }))
    .unwrap();
    let xml = render(variant_element(&variant));
    assert!(xml.starts_with(r#"<variant ref="entry-main">"#));
    assert!(xml.contains(r#"<trait name="environment" value="_British"/>"#));
    assert!(xml.contains(r#"<trait name="frequency" value="2"/>"#));
}

#[test]
fn relation_emits_order_verbatim() {
    let relation = serde_json::from_value(json!({
        "type": "_component-lexeme",
        "ref": "entry-stem",
        "order": 2
    }))
    .unwrap();
    let xml = render(relation_element(&relation).unwrap());
    assert_eq!(
        xml,
        r#"<relation type="_component-lexeme" ref="entry-stem" order="2"/>"#
    );
}

#[test]
fn relation_requires_type_and_ref() {
    let missing_type = serde_json::from_value(json!({"ref": "x"})).unwrap();
    assert!(matches!(
        relation_element(&missing_type).unwrap_err(),
        LiftError::MissingRequiredField { element: "relation", field: "type" }
    ));

    let missing_ref = serde_json::from_value(json!({"type": "synonym"})).unwrap();
    assert!(matches!(
        relation_element(&missing_ref).unwrap_err(),
        LiftError::MissingRequiredField { element: "relation", field: "ref" }
    ));
}

// ── Etymology ────────────────────────────────────────────────────

#[test]
fn etymology_emits_form_then_gloss() {
    let etymology = serde_json::from_value(json!({
        "type": "proto",
        "source": "bantu",
        "form": {"seh": "*-jumba"},
        "gloss": {"en": "enclosure"}
    }))
    .unwrap();
    let xml = render(etymology_element(&etymology).unwrap());
    assert!(xml.starts_with(r#"<etymology type="proto" source="bantu">"#));
    assert!(xml.find("<form").unwrap() < xml.find("<gloss").unwrap());
}

// ── Notes ────────────────────────────────────────────────────────

#[test]
fn note_type_comes_from_the_map_key() {
    let notes = serde_json::from_value(json!({
        "anthropology": "string note",
        "": {"en": "typeless note"}
    }))
    .unwrap();
    let rendered: Vec<String> = note_elements(&notes).into_iter().map(render).collect();
    assert_eq!(
        rendered[0],
        r#"<note type="anthropology"><form lang="en"><text>string note</text></form></note>"#
    );
    assert!(rendered[1].starts_with("<note>"));
    assert!(!rendered[1].contains("type="));
}

// ── Example ──────────────────────────────────────────────────────

#[test]
fn example_translation_wrapper_follows_key_presence() {
    let bare = serde_json::from_value(json!({"forms": {"en": "He runs."}})).unwrap();
    assert!(!render(example_element(&bare)).contains("<translation"));

    let with_empty = serde_json::from_value(json!({
        "forms": {"en": "He runs."},
        "translations": {"pt": ""}
    }))
    .unwrap();
    assert!(render(example_element(&with_empty)).contains("<translation/>"));

    let with_text = serde_json::from_value(json!({
        "source": "corpus-17",
        "forms": {"en": "He runs."},
        "translations": {"pt": "Ele corre."}
    }))
    .unwrap();
    let xml = render(example_element(&with_text));
    assert!(xml.starts_with(r#"<example source="corpus-17">"#));
    assert!(xml.contains(
        r#"<translation><form lang="pt"><text>Ele corre.</text></form></translation>"#
    ));
}

// ── Annotation & illustration ────────────────────────────────────

#[test]
fn annotation_attributes_are_all_optional() {
    let empty = serde_json::from_value(json!({})).unwrap();
    assert_eq!(render(annotation_element(&empty)), "<annotation/>");

    let full = serde_json::from_value(json!({
        "name": "reviewed",
        "value": "yes",
        "who": "editor-3",
        "when": "2024-05-01",
        "content": {"en": "looks right"}
    }))
    .unwrap();
    let xml = render(annotation_element(&full));
    assert!(xml.starts_with(
        r#"<annotation name="reviewed" value="yes" who="editor-3" when="2024-05-01">"#
    ));
}

#[test]
fn illustration_label_is_wrapped() {
    let illustration =
        serde_json::from_value(json!({"href": "nyumba.png", "label": {"en": "a house"}})).unwrap();
    let xml = render(illustration_element(&illustration).unwrap());
    assert_eq!(
        xml,
        r#"<illustration href="nyumba.png"><label><form lang="en"><text>a house</text></form></label></illustration>"#
    );
}

// ── Reversal ─────────────────────────────────────────────────────

#[test]
fn reversal_main_nests_recursively() {
    let reversal = serde_json::from_value(json!({
        "type": "en",
        "forms": {"en": "dwelling"},
        "grammaticalInfo": "Noun",
        "main": {"forms": {"en": "building"}, "main": {"forms": {"en": "structure"}}}
    }))
    .unwrap();
    let xml = render(reversal_element(&reversal));
    assert!(xml.starts_with(r#"<reversal type="en">"#));
    assert_eq!(xml.matches("<main>").count(), 2);
    assert!(xml.contains(r#"<grammatical-info value="Noun"/>"#));
    let outer_main = xml.find("<main>").unwrap();
    let inner = xml.rfind("<main>").unwrap();
    assert!(xml[inner..].contains("structure"));
    assert!(outer_main < inner);
}
