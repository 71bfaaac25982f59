use crate::compat::String;

/// One `&`-delimited entry of a query string.
///
/// Key and value are both optional, which keeps three build outcomes apart:
/// - no key: the pair is dropped from the output
/// - key without value: written as a bare `key`
/// - key with an empty value: written as `key=`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryPair {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl QueryPair {
    /// A pair with both key and value present
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }

    /// A key without a value, written as a bare `key`
    pub fn bare(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: None,
        }
    }

    pub fn from_parts(key: Option<String>, value: Option<String>) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Check if this pair has the given key
    pub fn has_key(&self, key: &str) -> bool {
        self.key.as_deref() == Some(key)
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for QueryPair {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_states_are_distinct() {
        let bare = QueryPair::bare("password");
        let empty = QueryPair::new("password", "");
        let keyless = QueryPair::from_parts(None, Some("SSM".into()));

        assert_ne!(bare, empty);
        assert_eq!(bare.value(), None);
        assert_eq!(empty.value(), Some(""));
        assert_eq!(keyless.key(), None);
        assert!(!keyless.has_key(""));
        assert!(bare.has_key("password"));
    }

    #[test]
    fn test_from_tuple() {
        let pair = QueryPair::from(("a", String::from("1")));
        assert_eq!(pair, QueryPair::new("a", "1"));
    }
}
