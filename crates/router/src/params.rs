//! Handler parameters.
//!
//! [`Params`] holds both the default parameters configured on a route and the
//! parameters extracted from the request path. Positional parameters (regex groups
//! without a name, trailing segments of the default convention route) are stored
//! under their ordinal index, i.e. `"0"`, `"1"`, ...

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::{Entry, Iter};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    inner: HashMap<String, String>,
}

impl Params {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds params from a positional list, the value at position `i` is keyed by `i`.
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        values.into_iter().enumerate().map(|(index, value)| (index.to_string(), value.into())).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Gets the value of a parameter by its name
    /// Returns None if the parameter doesn't exist
    #[inline]
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        self.inner.get(key.as_ref()).map(String::as_str)
    }

    /// Gets the value stored under the ordinal key `index`.
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<&str> {
        self.get(index.to_string())
    }

    #[inline]
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.inner.contains_key(key.as_ref())
    }

    /// Inserts a parameter, replacing and returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.inner.insert(key.into(), value.into())
    }

    /// Inserts a parameter only when `key` is not yet present.
    ///
    /// Returns `true` if the value was inserted.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        match self.inner.entry(key.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(value.into());
                true
            }
        }
    }

    /// Adds every entry of `other` whose key is absent here, present keys keep their value.
    pub fn merge_absent(&mut self, other: Params) {
        for (key, value) in other.inner {
            self.insert_if_absent(key, value);
        }
    }

    /// Values under the ordinal keys `"0"`, `"1"`, ... up to the first missing index.
    pub fn positional_values(&self) -> impl Iterator<Item = &str> + '_ {
        (0..).map_while(|index| self.get_index(index))
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.inner.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self { inner: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Params {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<HashMap<String, String>> for Params {
    fn from(inner: HashMap<String, String>) -> Self {
        Self { inner }
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::collections::hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Params;

    #[test]
    fn test_insert_if_absent_keeps_existing() {
        let mut params = Params::from([("a", "1")]);

        assert!(!params.insert_if_absent("a", "2"));
        assert!(params.insert_if_absent("b", "3"));

        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.get("b"), Some("3"));
    }

    #[test]
    fn test_merge_absent() {
        let mut defaults = Params::from([("a", "1")]);
        defaults.merge_absent(Params::from([("a", "2"), ("b", "3")]));

        assert_eq!(defaults, Params::from([("a", "1"), ("b", "3")]));
    }

    #[test]
    fn test_positional() {
        let params = Params::positional(["7", "edit"]);

        assert_eq!(params.get("0"), Some("7"));
        assert_eq!(params.get_index(1), Some("edit"));
        assert_eq!(params.positional_values().collect::<Vec<_>>(), vec!["7", "edit"]);
    }

    #[test]
    fn test_positional_values_stop_at_gap() {
        let params = Params::from([("0", "a"), ("2", "c"), ("name", "x")]);

        assert_eq!(params.positional_values().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_deserialize_from_map() {
        let params: Params = serde_json::from_str(r#"{"lang": "en"}"#).unwrap();

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("lang"), Some("en"));
    }
}
