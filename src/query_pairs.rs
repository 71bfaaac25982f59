use crate::builder::build_query_into;
use crate::charset::Charset;
use crate::compat::{String, ToString, Vec};
use crate::error::Result;
use crate::helpers::query_part;
use crate::pair::QueryPair;
use crate::parser::{ParseOptions, parse_pairs};

/// Ordered query parameters.
///
/// Pairs keep the order they were parsed or added in, duplicate keys
/// included. Nothing here reorders them except [`QueryPairs::sort`].
///
/// `Display` serializes with the charset the collection was parsed with
/// (or set through [`QueryPairs::with_charset`]) and the strict flag.
/// Equality compares the pairs only, not these display settings.
#[derive(Debug, Clone, Default)]
pub struct QueryPairs {
    pairs: Vec<QueryPair>,
    charset: Charset,
    strict: bool,
}

impl QueryPairs {
    /// Empty collection using the pass-through charset
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty collection that serializes with `charset`
    pub fn with_charset(charset: Charset) -> Self {
        Self {
            charset,
            ..Self::default()
        }
    }

    /// Parse a raw query string (no leading `?` handling: `?` is data here).
    ///
    /// Empty segments are skipped; see [`QueryPairs::parse_with`] to keep them.
    /// A bare empty key (`""` with no value) builds to an empty segment, so it
    /// only survives a build and re-parse under [`EmptySegments::Keep`].
    ///
    /// [`EmptySegments::Keep`]: crate::EmptySegments::Keep
    pub fn parse(raw: &str, charset: Charset) -> Result<Self> {
        Self::parse_with(raw, charset, ParseOptions::default())
    }

    pub fn parse_with(raw: &str, charset: Charset, options: ParseOptions) -> Result<Self> {
        let pairs = parse_pairs(raw, charset, options)?;
        Ok(Self {
            pairs,
            charset,
            strict: false,
        })
    }

    /// Parse the query of a full URL (`http://host/path?a=1#frag` -> `a=1`).
    ///
    /// A URL without `?` has no parameters. Input with neither `?` nor `://`
    /// is treated as a bare query string.
    pub fn parse_url(input: &str, charset: Charset) -> Result<Self> {
        match query_part(input) {
            Some(query) => Self::parse(query, charset),
            None => Ok(Self::with_charset(charset)),
        }
    }

    /// Serialize with an explicit charset and escaping mode.
    ///
    /// Parsing the result gives back the same pairs, except keyless pairs
    /// (never written) and bare empty keys (empty segments, dropped unless
    /// parsed with [`EmptySegments::Keep`]).
    ///
    /// [`EmptySegments::Keep`]: crate::EmptySegments::Keep
    pub fn build(&self, charset: Charset, strict: bool) -> String {
        let mut result = String::new();
        build_query_into(&mut result, &self.pairs, charset, strict);
        result
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Escape everything outside the unreserved set when displayed
    pub fn set_strict(&mut self, strict: bool) -> &mut Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Append a pair. A `None` key is kept but skipped when building.
    pub fn add(&mut self, key: Option<&str>, value: Option<&str>) -> &mut Self {
        self.pairs.push(QueryPair::from_parts(
            key.map(ToString::to_string),
            value.map(ToString::to_string),
        ));
        self
    }

    pub fn append(&mut self, key: &str, value: &str) -> &mut Self {
        self.pairs.push(QueryPair::new(key, value));
        self
    }

    pub fn push(&mut self, pair: QueryPair) -> &mut Self {
        self.pairs.push(pair);
        self
    }

    /// Value of the first pair with `key`.
    ///
    /// A bare key (no `=`) also reads as `None`; use
    /// [`QueryPairs::contains_key`] or [`QueryPairs::get_pair`] to tell the
    /// cases apart.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_pair(key).and_then(QueryPair::value)
    }

    /// First pair with `key`
    pub fn get_pair(&self, key: &str) -> Option<&QueryPair> {
        self.pairs.iter().find(|pair| pair.has_key(key))
    }

    /// Values of every pair with `key`, bare keys skipped
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|pair| pair.has_key(key))
            .filter_map(QueryPair::value)
            .collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|pair| pair.has_key(key))
    }

    /// Set a key to a single value, replacing all existing values for that key.
    /// The first occurrence keeps its position; a new key is appended.
    pub fn set(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        let mut found_first = false;
        self.pairs.retain_mut(|pair| {
            if !pair.has_key(key) {
                return true;
            }
            if found_first {
                return false;
            }
            found_first = true;
            pair.value = value.map(ToString::to_string);
            true
        });
        if !found_first {
            self.add(Some(key), value);
        }
        self
    }

    /// Remove every pair with `key`, returning how many were removed
    pub fn remove(&mut self, key: &str) -> usize {
        let before = self.pairs.len();
        self.pairs.retain(|pair| !pair.has_key(key));
        before - self.pairs.len()
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// Stable sort by key; keyless pairs come first.
    pub fn sort(&mut self) {
        self.pairs.sort_by(|a, b| a.key.cmp(&b.key));
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, QueryPair> {
        self.pairs.iter()
    }

    /// Keys in order, keyless pairs skipped
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().filter_map(QueryPair::key)
    }

    pub fn as_slice(&self) -> &[QueryPair] {
        &self.pairs
    }

    pub fn into_vec(self) -> Vec<QueryPair> {
        self.pairs
    }
}

impl PartialEq for QueryPairs {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl Eq for QueryPairs {}

impl core::fmt::Display for QueryPairs {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.build(self.charset, self.strict))
    }
}

impl From<Vec<QueryPair>> for QueryPairs {
    fn from(pairs: Vec<QueryPair>) -> Self {
        Self {
            pairs,
            ..Self::default()
        }
    }
}

impl FromIterator<QueryPair> for QueryPairs {
    fn from_iter<I: IntoIterator<Item = QueryPair>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// Collects key/value tuples in iteration order, e.g. from a `BTreeMap`
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryPairs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().map(QueryPair::from).collect()
    }
}

impl Extend<QueryPair> for QueryPairs {
    fn extend<I: IntoIterator<Item = QueryPair>>(&mut self, iter: I) {
        self.pairs.extend(iter);
    }
}

impl IntoIterator for QueryPairs {
    type Item = QueryPair;
    type IntoIter = crate::compat::vec::IntoIter<QueryPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryPairs {
    type Item = &'a QueryPair;
    type IntoIter = core::slice::Iter<'a, QueryPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QueryPairs {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.pairs)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for QueryPairs {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        <Vec<QueryPair> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}
