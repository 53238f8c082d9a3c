//! Ordered key/value metadata.

use serde::{Deserialize, Serialize};

/// Small insertion-ordered string map.
///
/// Keys are unique: [`Metadata::set`] overwrites an existing entry in place
/// and only appends when the key is new. Lookups are linear, which is cheap
/// for the handful of entries a dataset group carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct Metadata(Vec<(String, String)>);

impl Metadata {
    /// Creates an empty metadata store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Updates the entry for `key` in place, or appends it if absent.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Removes the entry for `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(index).1)
    }

    /// Returns true if an entry exists for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// Returns the key at `index` in insertion order.
    pub fn key(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(|(k, _)| k.as_str())
    }

    /// Returns the value at `index` in insertion order.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(|(_, v)| v.as_str())
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Deserialized pairs go through `set`, so repeated keys collapse onto the
// first occurrence and keep the last value.
impl From<Vec<(String, String)>> for Metadata {
    fn from(pairs: Vec<(String, String)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Metadata::new();
        for (key, value) in iter {
            metadata.set(key, value);
        }
        metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_set_appends_new_keys_in_order() {
        let mut metadata = Metadata::new();
        metadata.set("name", "depth");
        metadata.set("units", "m");
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata.key(0), Some("name"));
        assert_eq!(metadata.key(1), Some("units"));
        assert_eq!(metadata.value(1), Some("m"));
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut metadata = Metadata::new();
        metadata.set("a", "1");
        metadata.set("b", "2");
        metadata.set("a", "3");
        let pairs: Vec<_> = metadata.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_missing_key() {
        let metadata = Metadata::new();
        assert_eq!(metadata.get("nope"), None);
        assert!(!metadata.contains_key("nope"));
        assert!(metadata.key(0).is_none());
    }

    #[test]
    fn test_remove() {
        let mut metadata: Metadata = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(metadata.remove("a"), Some("1".to_string()));
        assert_eq!(metadata.remove("a"), None);
        assert_eq!(metadata.key(0), Some("b"));
    }

    #[test]
    fn test_deserialize_collapses_duplicates() {
        let metadata: Metadata =
            serde_json::from_str(r#"[["a","1"],["b","2"],["a","3"]]"#).unwrap();
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata.get("a"), Some("3"));
        assert_eq!(metadata.key(0), Some("a"));
    }

    proptest! {
        #[test]
        fn prop_set_then_get(key in ".*", first in ".*", second in ".*") {
            let mut metadata = Metadata::new();
            metadata.set(key.clone(), first.clone());
            prop_assert_eq!(metadata.get(&key), Some(first.as_str()));
            metadata.set(key.clone(), second.clone());
            prop_assert_eq!(metadata.get(&key), Some(second.as_str()));
            prop_assert_eq!(metadata.len(), 1);
        }

        #[test]
        fn prop_keys_stay_unique(keys in proptest::collection::vec("[a-d]", 0..32)) {
            let mut metadata = Metadata::new();
            for (i, key) in keys.iter().enumerate() {
                metadata.set(key.clone(), i.to_string());
            }
            let mut seen: Vec<&str> = metadata.iter().map(|(k, _)| k).collect();
            let total = seen.len();
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), total);
        }
    }
}
