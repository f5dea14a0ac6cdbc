use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entry::{Annotation, Relation};
use crate::grammar::GrammaticalInfo;
use crate::text::MultiText;

/// A sense of an entry, or a subsense of a sense.
///
/// Subsenses reuse this type unchanged and nest to any depth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(alias = "grammatical_info", skip_serializing_if = "Option::is_none")]
    pub grammatical_info: Option<GrammaticalInfo>,
    #[serde(skip_serializing_if = "MultiText::is_empty")]
    pub glosses: MultiText,
    #[serde(alias = "definition", skip_serializing_if = "MultiText::is_empty")]
    pub definitions: MultiText,
    #[serde(alias = "domain_type", skip_serializing_if = "Option::is_none")]
    pub domain_type: Option<String>,
    #[serde(alias = "semantic_domain", skip_serializing_if = "Option::is_none")]
    pub semantic_domain: Option<String>,
    #[serde(alias = "usage_type", skip_serializing_if = "Option::is_none")]
    pub usage_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
    /// Note type → note text (plain string or multitext map).
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub notes: Map<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<Relation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subsenses: Vec<Sense>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reversals: Vec<Reversal>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub illustrations: Vec<Illustration>,
}

/// A usage example with its translations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Example {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "MultiText::is_empty")]
    pub forms: MultiText,
    #[serde(skip_serializing_if = "MultiText::is_empty")]
    pub translations: MultiText,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub notes: Map<String, Value>,
}

/// A reversal index entry. `main` points at the parent reversal and nests
/// recursively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reversal {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rev_type: Option<String>,
    #[serde(skip_serializing_if = "MultiText::is_empty")]
    pub forms: MultiText,
    #[serde(alias = "grammatical_info", skip_serializing_if = "Option::is_none")]
    pub grammatical_info: Option<GrammaticalInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<Box<Reversal>>,
}

/// A picture attached to a sense. `href` is required at serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Illustration {
    pub href: String,
    #[serde(skip_serializing_if = "MultiText::is_empty")]
    pub label: MultiText,
}
