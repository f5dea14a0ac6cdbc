//! Indexed-collection normalization.

use serde_json::Value;

/// Keys that must never be interpreted as data, at any nesting level.
pub(crate) const UNSAFE_KEYS: [&str; 3] = ["__proto__", "constructor", "prototype"];

pub(crate) fn is_unsafe_key(key: &str) -> bool {
    UNSAFE_KEYS.contains(&key)
}

/// Convert an index-keyed collection into an ordered `Vec`.
///
/// Repeated form sections serialize either as a real JSON array or as an
/// object keyed by decimal strings ("0", "1", ...). Arrays pass through
/// unchanged. Objects are ordered by the numeric value of the key; keys
/// that are not clean base-10 integers are dropped, as are the
/// prototype-pollution keys. Any other value (null, string, number)
/// normalizes to empty.
#[must_use]
pub fn normalize_indexed(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(map) => {
            let mut keyed: Vec<(u64, Value)> = map
                .into_iter()
                .filter(|(key, _)| !is_unsafe_key(key))
                .filter_map(|(key, item)| parse_index(&key).map(|idx| (idx, item)))
                .collect();
            keyed.sort_by_key(|&(idx, _)| idx);
            keyed.into_iter().map(|(_, item)| item).collect()
        }
        _ => Vec::new(),
    }
}

/// Parse a clean base-10 index: digits only, no sign, no leading zeros
/// except "0" itself.
fn parse_index(key: &str) -> Option<u64> {
    key.parse::<u64>().ok().filter(|idx| idx.to_string() == key)
}
