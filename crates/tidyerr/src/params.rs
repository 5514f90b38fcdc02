//! String-keyed parameter maps interpolated into message templates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered mapping from parameter name to captured value.
///
/// Values are captured as their display strings at insertion time and are
/// opaque to the formatter except for `{name}` interpolation. Parameter
/// names are expected to be valid identifiers; placeholders only ever parse
/// as identifiers, so a non-identifier key can never match one.
///
/// Insertion order is preserved. Setting an existing key replaces its value
/// in place.
#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, capturing the value as its display string.
    ///
    /// If the key is already present its value is replaced without moving
    /// the entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        let key = key.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the captured value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Removes a parameter, returning its captured value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Builds a [`Params`] map from `name: value` pairs.
///
/// Keys are Rust identifiers, so invalid parameter names are rejected at
/// compile time. Values may be anything implementing `Display`.
#[macro_export]
macro_rules! params {
    () => {
        $crate::Params::new()
    };
    ($($key:ident : $value:expr),+ $(,)?) => {{
        let mut params = $crate::Params::new();
        $(params.set(stringify!($key), $value);)+
        params
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get() {
        let mut params = Params::new();
        params.set("product", "Red Leicester");
        params.set("count", 3);
        assert_eq!(params.get("product"), Some("Red Leicester"));
        assert_eq!(params.get("count"), Some("3"));
        assert_eq!(params.get("absent"), None);
    }

    #[test]
    fn set_replaces_in_place() {
        let mut params = Params::new();
        params.set("a", 1);
        params.set("b", 2);
        params.set("a", 10);
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("a", "10"), ("b", "2")]);
    }

    #[test]
    fn remove() {
        let mut params = params! { a: 1, b: 2 };
        assert_eq!(params.remove("a"), Some("1".to_string()));
        assert_eq!(params.remove("a"), None);
        assert_eq!(params.len(), 1);
        assert!(params.contains("b"));
    }

    #[test]
    fn macro_builds_map() {
        let params = params! { name: "spam", count: 42 };
        assert_eq!(params.get("name"), Some("spam"));
        assert_eq!(params.get("count"), Some("42"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn empty_macro() {
        let params = params! {};
        assert!(params.is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let params = params! { a: 1, b: "two" };
        let json = serde_json::to_string(&params).unwrap();
        let back: Params = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }
}
