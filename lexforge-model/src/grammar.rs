use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Part-of-speech information on an entry, sense, or reversal.
///
/// Saved form data carries either a bare string (`"Noun"`) or an object
/// from the grammar picker whose value sits under one of several keys.
/// [`GrammaticalInfo::resolve`] collapses both shapes to the string the
/// `value` attribute of `<grammatical-info>` wants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GrammaticalInfo {
    Value(String),
    Detailed(Map<String, Value>),
}

impl GrammaticalInfo {
    /// Resolve the part-of-speech string.
    ///
    /// Objects are probed for `value`, `part_of_speech`, `partOfSpeech`
    /// in that order (skipping empty strings), then fall back to the
    /// first property in document order, stringifying scalars.
    #[must_use]
    pub fn resolve(&self) -> Option<String> {
        match self {
            Self::Value(s) => Some(s.clone()),
            Self::Detailed(map) => ["value", "part_of_speech", "partOfSpeech"]
                .iter()
                .find_map(|key| {
                    map.get(*key)
                        .and_then(Value::as_str)
                        .filter(|text| !text.is_empty())
                        .map(str::to_string)
                })
                .or_else(|| map.values().next().and_then(scalar_to_string)),
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
