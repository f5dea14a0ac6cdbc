//! Builders for the individual LIFT elements.
//!
//! Each builder maps one model value to one element. Optional fields that
//! are absent or empty simply produce nothing; the only failures are the
//! required attributes on `<relation>`, `<etymology>`, and
//! `<illustration>`.

use serde_json::{Map, Value};

use lexforge_model::{
    Annotation, Etymology, Example, GrammaticalInfo, Illustration, MultiText, Pronunciation,
    Relation, Reversal, Variant,
};

use crate::error::{LiftError, LiftResult};
use crate::xml::XmlElement;

/// `<form lang="..."><text>...</text></form>`
#[must_use]
pub fn form_element(lang: &str, text: &str) -> XmlElement {
    XmlElement::new("form")
        .with_attr("lang", lang)
        .with_child(XmlElement::new("text").with_text(text))
}

/// One `<form>` per language with non-empty text, in document order.
#[must_use]
pub fn form_elements(texts: &MultiText) -> Vec<XmlElement> {
    texts
        .texts()
        .map(|(lang, text)| form_element(lang, text))
        .collect()
}

/// One `<gloss>` per language with non-empty text, in document order.
#[must_use]
pub fn gloss_elements(texts: &MultiText) -> Vec<XmlElement> {
    texts
        .texts()
        .map(|(lang, text)| {
            XmlElement::new("gloss")
                .with_attr("lang", lang)
                .with_child(XmlElement::new("text").with_text(text))
        })
        .collect()
}

/// `<grammatical-info value="..."/>`, or nothing when no value resolves.
#[must_use]
pub fn grammatical_info_element(info: &GrammaticalInfo) -> Option<XmlElement> {
    info.resolve()
        .filter(|value| !value.is_empty())
        .map(|value| XmlElement::new("grammatical-info").with_attr("value", value))
}

/// `<trait name="..." value="..."/>`
#[must_use]
pub fn trait_element(name: &str, value: &str) -> XmlElement {
    XmlElement::new("trait")
        .with_attr("name", name)
        .with_attr("value", value)
}

fn trait_elements(traits: &Map<String, Value>) -> Vec<XmlElement> {
    traits
        .iter()
        .filter_map(|(name, value)| {
            attr_text(value)
                .filter(|text| !text.is_empty())
                .map(|text| trait_element(name, &text))
        })
        .collect()
}

/// `<pronunciation>` with forms, media, and the cv-pattern/tone fields.
#[must_use]
pub fn pronunciation_element(pronunciation: &Pronunciation) -> XmlElement {
    let mut el = XmlElement::new("pronunciation").with_children(form_elements(&pronunciation.forms));
    for media in &pronunciation.media {
        if let Some(href) = media.href.as_deref().filter(|href| !href.is_empty()) {
            el.push_child(XmlElement::new("media").with_attr("href", href));
        }
    }
    if pronunciation.cv_pattern.has_text() {
        el.push_child(typed_field("cv-pattern", &pronunciation.cv_pattern));
    }
    if pronunciation.tone.has_text() {
        el.push_child(typed_field("tone", &pronunciation.tone));
    }
    el
}

fn typed_field(field_type: &str, texts: &MultiText) -> XmlElement {
    XmlElement::new("field")
        .with_attr("type", field_type)
        .with_children(form_elements(texts))
}

/// `<variant>` with an optional ref, forms, and traits.
#[must_use]
pub fn variant_element(variant: &Variant) -> XmlElement {
    XmlElement::new("variant")
        .with_opt_attr("ref", non_empty(&variant.target))
        .with_children(form_elements(&variant.forms))
        .with_children(trait_elements(&variant.traits))
}

/// `<relation type="..." ref="..."/>`. Type and ref are required.
pub fn relation_element(relation: &Relation) -> LiftResult<XmlElement> {
    if relation.rel_type.is_empty() {
        return Err(LiftError::MissingRequiredField {
            element: "relation",
            field: "type",
        });
    }
    if relation.target.is_empty() {
        return Err(LiftError::MissingRequiredField {
            element: "relation",
            field: "ref",
        });
    }
    let mut el = XmlElement::new("relation")
        .with_attr("type", relation.rel_type.as_str())
        .with_attr("ref", relation.target.as_str());
    if let Some(order) = &relation.order {
        el = el.with_attr("order", order.to_string());
    }
    Ok(el.with_children(trait_elements(&relation.traits)))
}

/// `<etymology type="..." source="...">` with form and gloss children.
/// Type and source are required.
pub fn etymology_element(etymology: &Etymology) -> LiftResult<XmlElement> {
    if etymology.ety_type.is_empty() {
        return Err(LiftError::MissingRequiredField {
            element: "etymology",
            field: "type",
        });
    }
    if etymology.source.is_empty() {
        return Err(LiftError::MissingRequiredField {
            element: "etymology",
            field: "source",
        });
    }
    Ok(XmlElement::new("etymology")
        .with_attr("type", etymology.ety_type.as_str())
        .with_attr("source", etymology.source.as_str())
        .with_children(form_elements(&etymology.form))
        .with_children(gloss_elements(&etymology.gloss)))
}

/// One `<note>` per notes-map entry, keyed by note type.
///
/// An empty-string key produces a typeless note. Values may be plain
/// strings (carried as an `en` form) or multitext maps.
#[must_use]
pub fn note_elements(notes: &Map<String, Value>) -> Vec<XmlElement> {
    notes
        .iter()
        .map(|(note_type, content)| note_element(note_type, content))
        .collect()
}

fn note_element(note_type: &str, content: &Value) -> XmlElement {
    let mut el = XmlElement::new("note");
    if !note_type.is_empty() {
        el = el.with_attr("type", note_type);
    }
    match content {
        Value::String(text) if !text.is_empty() => el.with_child(form_element("en", text)),
        Value::Object(_) => el.with_children(form_elements(&MultiText::from_value(content))),
        _ => el,
    }
}

/// `<example>` with a source attribute, forms, one `<translation>`
/// wrapper, and notes.
#[must_use]
pub fn example_element(example: &Example) -> XmlElement {
    let mut el = XmlElement::new("example")
        .with_opt_attr("source", non_empty(&example.source))
        .with_children(form_elements(&example.forms));
    if !example.translations.is_empty() {
        el.push_child(
            XmlElement::new("translation").with_children(form_elements(&example.translations)),
        );
    }
    el.with_children(note_elements(&example.notes))
}

/// `<illustration href="...">` with an optional `<label>`. Href is
/// required.
pub fn illustration_element(illustration: &Illustration) -> LiftResult<XmlElement> {
    if illustration.href.is_empty() {
        return Err(LiftError::MissingRequiredField {
            element: "illustration",
            field: "href",
        });
    }
    let mut el = XmlElement::new("illustration").with_attr("href", illustration.href.as_str());
    if !illustration.label.is_empty() {
        el.push_child(XmlElement::new("label").with_children(form_elements(&illustration.label)));
    }
    Ok(el)
}

/// `<annotation>` with whichever of name, value, who, when are present.
#[must_use]
pub fn annotation_element(annotation: &Annotation) -> XmlElement {
    XmlElement::new("annotation")
        .with_opt_attr("name", non_empty(&annotation.name))
        .with_opt_attr("value", non_empty(&annotation.value))
        .with_opt_attr("who", non_empty(&annotation.who))
        .with_opt_attr("when", non_empty(&annotation.when))
        .with_children(form_elements(&annotation.content))
}

/// `<reversal>` with forms, grammatical-info, and a recursive `<main>`.
#[must_use]
pub fn reversal_element(reversal: &Reversal) -> XmlElement {
    reversal_like("reversal", reversal)
}

fn reversal_like(name: &str, reversal: &Reversal) -> XmlElement {
    let mut el = XmlElement::new(name)
        .with_opt_attr("type", non_empty(&reversal.rev_type))
        .with_children(form_elements(&reversal.forms));
    if let Some(info) = reversal.grammatical_info.as_ref().and_then(grammatical_info_element) {
        el.push_child(info);
    }
    if let Some(main) = &reversal.main {
        el.push_child(reversal_like("main", main));
    }
    el
}

/// Some("...") when the option holds a non-empty string.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

fn attr_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
