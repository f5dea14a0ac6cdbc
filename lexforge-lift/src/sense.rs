//! Sense and subsense assembly.

use lexforge_model::Sense;

use crate::elements::{
    annotation_element, example_element, form_elements, gloss_elements, grammatical_info_element,
    illustration_element, non_empty, note_elements, relation_element, reversal_element,
    trait_element,
};
use crate::error::LiftResult;
use crate::ids::generate_element_id;
use crate::xml::XmlElement;

/// Build one `<sense>` element. `order` is the zero-based position among
/// the entry's senses and becomes the `order` attribute.
///
/// Subsenses recurse through the same body under a `<subsense>` tag, each
/// ordered within its parent. Child order is fixed: grammatical-info,
/// glosses, definition, traits, examples, notes, relations, subsenses,
/// reversals, annotations, illustrations.
pub fn build_sense(sense: &Sense, order: usize) -> LiftResult<XmlElement> {
    build_sense_like("sense", sense, order)
}

fn build_sense_like(tag: &str, sense: &Sense, order: usize) -> LiftResult<XmlElement> {
    let id = sense.id.clone().filter(|id| !id.is_empty()).unwrap_or_else(generate_element_id);
    let mut el = XmlElement::new(tag)
        .with_attr("id", id)
        .with_attr("order", order.to_string());

    if let Some(info) = sense.grammatical_info.as_ref().and_then(grammatical_info_element) {
        el.push_child(info);
    }
    for gloss in gloss_elements(&sense.glosses) {
        el.push_child(gloss);
    }
    if !sense.definitions.is_empty() {
        el.push_child(
            XmlElement::new("definition").with_children(form_elements(&sense.definitions)),
        );
    }
    if let Some(value) = non_empty(&sense.domain_type) {
        el.push_child(trait_element("domain-type", value));
    }
    if let Some(value) = non_empty(&sense.semantic_domain) {
        el.push_child(trait_element("semantic-domain", value));
    }
    if let Some(value) = non_empty(&sense.usage_type) {
        el.push_child(trait_element("usage-type", value));
    }
    for example in &sense.examples {
        el.push_child(example_element(example));
    }
    for note in note_elements(&sense.notes) {
        el.push_child(note);
    }
    for relation in &sense.relations {
        el.push_child(relation_element(relation)?);
    }
    for (idx, subsense) in sense.subsenses.iter().enumerate() {
        el.push_child(build_sense_like("subsense", subsense, idx)?);
    }
    for reversal in &sense.reversals {
        el.push_child(reversal_element(reversal));
    }
    for annotation in &sense.annotations {
        el.push_child(annotation_element(annotation));
    }
    for illustration in &sense.illustrations {
        el.push_child(illustration_element(illustration)?);
    }
    Ok(el)
}
