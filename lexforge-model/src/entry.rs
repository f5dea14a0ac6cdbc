use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::grammar::GrammaticalInfo;
use crate::sense::Sense;
use crate::text::MultiText;

/// One dictionary entry as collected from the entry form.
///
/// Every field is optional at intake; whether a missing field is tolerable
/// is the serializer's call, not the model's. Wire names are camelCase and
/// the snake_case spellings of older saved forms are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Entry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(alias = "lexical_unit", skip_serializing_if = "MultiText::is_empty")]
    pub lexical_unit: MultiText,
    #[serde(alias = "grammatical_info", skip_serializing_if = "Option::is_none")]
    pub grammatical_info: Option<GrammaticalInfo>,
    #[serde(alias = "morph_type", skip_serializing_if = "Option::is_none")]
    pub morph_type: Option<String>,
    #[serde(alias = "date_created", skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(alias = "date_modified", skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pronunciations: Vec<Pronunciation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<Variant>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<Relation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub etymologies: Vec<Etymology>,
    /// Note type → note text (plain string or multitext map).
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub notes: Map<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub senses: Vec<Sense>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

/// A pronunciation block: forms plus optional media and phonetic fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pronunciation {
    #[serde(skip_serializing_if = "MultiText::is_empty")]
    pub forms: MultiText,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<Media>,
    #[serde(alias = "cv_pattern", skip_serializing_if = "MultiText::is_empty")]
    pub cv_pattern: MultiText,
    #[serde(skip_serializing_if = "MultiText::is_empty")]
    pub tone: MultiText,
}

/// An audio or media file attached to a pronunciation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// A variant form of the headword.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variant {
    /// Ref to the entry this is a variant of, when the form linked one.
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "MultiText::is_empty")]
    pub forms: MultiText,
    /// Trait name → trait value.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub traits: Map<String, Value>,
}

/// A lexical relation to another entry or sense.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relation {
    /// Relation type, e.g. "synonym" or "_component-lexeme". Empty means
    /// the form never supplied one; serialization requires it.
    #[serde(rename = "type")]
    pub rel_type: String,
    /// Id of the related entry or sense. Serialization requires it.
    #[serde(rename = "ref")]
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Number>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub traits: Map<String, Value>,
}

/// Where a word came from. Type and source are required at serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Etymology {
    #[serde(rename = "type")]
    pub ety_type: String,
    pub source: String,
    #[serde(skip_serializing_if = "MultiText::is_empty")]
    pub form: MultiText,
    #[serde(skip_serializing_if = "MultiText::is_empty")]
    pub gloss: MultiText,
}

/// An editorial annotation. All attributes are optional, including `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub who: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
    #[serde(skip_serializing_if = "MultiText::is_empty")]
    pub content: MultiText,
}
