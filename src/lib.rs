#![cfg_attr(not(feature = "std"), no_std)]

//! Query string parsing and building with explicit charsets and RFC 3986
//! escaping.
//!
//! ```
//! use urlquery::{Charset, QueryPairs};
//!
//! let query = QueryPairs::parse("a=1&b=111==", Charset::utf_8()).unwrap();
//! assert_eq!(query.get("b"), Some("111=="));
//! assert_eq!(query.to_string(), "a=1&b=111==");
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod builder;
mod character_sets;
mod charset;
mod error;
mod helpers;
mod pair;
mod parser;
mod percent;
mod query_pairs;

// Public API
pub use builder::{build_query, build_query_into};
pub use character_sets::{QUERY_KEY_SET, QUERY_VALUE_SET, STRICT_SET, SafeChars};
pub use charset::Charset;
pub use error::{QueryError, Result};
pub use pair::QueryPair;
pub use parser::{EmptySegments, ParseOptions};
pub use percent::{percent_decode, percent_encode, percent_encode_into};
pub use query_pairs::QueryPairs;

/// Parse a raw query string into pairs, skipping empty segments
pub fn parse(raw: &str, charset: Charset) -> Result<QueryPairs> {
    QueryPairs::parse(raw, charset)
}

/// Build a query string from pairs; see [`build_query`]
pub fn build(pairs: &QueryPairs, charset: Charset, strict: bool) -> compat::String {
    pairs.build(charset, strict)
}
