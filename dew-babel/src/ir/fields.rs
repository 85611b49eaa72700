//! Lenient readers over JSON objects
//!
//! Node attributes and section fields are written by the browser editor and are not
//! validated anywhere upstream. Readers here never fail: a value that is absent, `null`,
//! of the wrong type, an empty string or a non-positive number reads as `None`, and the
//! caller substitutes the default from [`super::defaults`].

use serde_json::{Map, Value};

/// Read-only view over an optional JSON object.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a>(Option<&'a Map<String, Value>>);

impl<'a> Fields<'a> {
    pub(crate) fn of(map: Option<&'a Map<String, Value>>) -> Self {
        Fields(map)
    }

    /// View the fields of `value` if it is an object.
    pub(crate) fn of_value(value: &'a Value) -> Self {
        Fields(value.as_object())
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'a Value> {
        self.0.and_then(|map| map.get(key))
    }

    /// A non-empty string field.
    pub(crate) fn str(&self, key: &str) -> Option<&'a str> {
        self.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// A string field, or the empty string.
    pub(crate) fn string(&self, key: &str) -> String {
        self.str(key).unwrap_or_default().to_string()
    }

    /// A strictly positive integer field. Floats are truncated and numeric strings parsed.
    pub(crate) fn positive_int(&self, key: &str) -> Option<u64> {
        let n = match self.get(key)? {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 1.0).map(|f| f as u64)),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        }?;
        (n > 0).then_some(n)
    }

    /// The string entries of an array field; other entries are skipped.
    pub(crate) fn strings(&self, key: &str) -> Vec<String> {
        self.array(key)
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    }

    /// An array field, or an empty slice.
    pub(crate) fn array(&self, key: &str) -> &'a [Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
