//! Ordered query-parameter multimap for the events endpoint.

use serde::{Serialize, Serializer};
use std::fmt;

/// Ordered `(key, value)` pairs. Keys may repeat (`organization_id`,
/// `category`); order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, keeping any existing values for `key`.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Replace every value for `key` with a single one, kept at the position
    /// of the first existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| *k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index <= first || *k != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key, value)),
        }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `application/x-www-form-urlencoded` rendering, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

// A sequence of pairs, which is what `reqwest::RequestBuilder::query` expects.
impl Serialize for QueryParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.pairs.iter())
    }
}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_repeats_in_order() {
        let mut params = QueryParams::new();
        params.append("organization_id", "10");
        params.append("location", "Austin");
        params.append("organization_id", "20");

        assert_eq!(params.get_all("organization_id"), vec!["10", "20"]);
        assert_eq!(params.get("organization_id"), Some("10"));
        assert_eq!(params.len(), 3);
        assert_eq!(
            params.to_query_string(),
            "organization_id=10&location=Austin&organization_id=20"
        );
    }

    #[test]
    fn test_set_collapses_repeats() {
        let mut params = QueryParams::new();
        params.append("category", "Health");
        params.append("location", "Austin");
        params.append("category", "Sports");
        params.set("category", "Education");

        assert_eq!(params.get_all("category"), vec!["Education"]);
        assert_eq!(params.to_query_string(), "category=Education&location=Austin");

        params.set("is_weekday", "false");
        assert_eq!(params.get("is_weekday"), Some("false"));
    }

    #[test]
    fn test_encoding() {
        let mut params = QueryParams::new();
        params.append("location", "New York");
        params.append("begin_time", "06:00");
        assert_eq!(params.to_string(), "location=New+York&begin_time=06%3A00");
    }

    #[test]
    fn test_empty() {
        let params = QueryParams::new();
        assert!(params.is_empty());
        assert!(!params.has("location"));
        assert_eq!(params.to_query_string(), "");
    }

    #[test]
    fn test_serializes_as_pairs() {
        let mut params = QueryParams::new();
        params.append("organization_id", "10");
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!([["organization_id", "10"]]));
    }
}
