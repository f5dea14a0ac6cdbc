use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A language-tagged text map, e.g. `{"en": "mountain", "fr": "montagne"}`.
///
/// Keys are language tags. Values are plain strings or objects carrying the
/// string under a `text` or `value` property; both shapes occur in saved
/// form data. Iteration follows insertion order, which is the document
/// order of the form the map came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MultiText(Map<String, Value>);

// Tolerant: null or a scalar where a multitext belongs reads as empty.
impl<'de> Deserialize<'de> for MultiText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Object(map) => Self(map),
            _ => Self::new(),
        })
    }
}

impl MultiText {
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build from `(language, text)` pairs, keeping their order.
    #[must_use]
    pub fn of<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Map::new();
        for (lang, text) in pairs {
            map.insert(lang.into(), Value::String(text.into()));
        }
        Self(map)
    }

    /// Interpret an arbitrary JSON value as a multitext map.
    ///
    /// Non-object values produce an empty map.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self(map.clone()),
            _ => Self::new(),
        }
    }

    pub fn insert(&mut self, lang: impl Into<String>, text: impl Into<String>) {
        self.0.insert(lang.into(), Value::String(text.into()));
    }

    /// The text for one language, if present and text-shaped.
    #[must_use]
    pub fn get(&self, lang: &str) -> Option<&str> {
        self.0.get(lang).and_then(extract_text)
    }

    /// `(language, text)` pairs in insertion order.
    ///
    /// Entries whose value is empty or not text-shaped are skipped, so an
    /// empty iterator does not imply an empty map.
    pub fn texts(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter_map(|(lang, value)| extract_text(value).map(|text| (lang.as_str(), text)))
            .filter(|(_, text)| !text.is_empty())
    }

    /// Whether at least one language resolves to non-empty text.
    #[must_use]
    pub fn has_text(&self) -> bool {
        self.texts().next().is_some()
    }

    /// Whether the map has no keys at all.
    ///
    /// Distinct from `!has_text()`: a map of empty strings is not empty,
    /// and wrapper elements key off raw presence.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Pull the text out of a multitext value: a plain string, or a string
/// under `text` or `value` in an object. Anything else yields `None`.
fn extract_text(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s.as_str()),
        Value::Object(map) => map
            .get("text")
            .or_else(|| map.get("value"))
            .and_then(Value::as_str),
        _ => None,
    }
}
