mod options;

pub use options::{EmptySegments, ParseOptions};

use crate::charset::Charset;
use crate::compat::{String, Vec};
use crate::error::Result;
use crate::helpers::split_segment;
use crate::pair::QueryPair;
use crate::percent::percent_decode;

/// Split a raw query string into decoded pairs, in the order they appear.
///
/// Only the first `=` of a segment separates key from value. A segment
/// without `=` becomes a key with no value. Error offsets point into `raw`.
///
/// An empty segment is dropped under [`EmptySegments::Skip`] and becomes a
/// bare empty key under [`EmptySegments::Keep`]. Only `Keep` gives back a
/// bare empty key written by [`build_query`](crate::build_query).
pub fn parse_pairs(raw: &str, charset: Charset, options: ParseOptions) -> Result<Vec<QueryPair>> {
    let mut pairs = Vec::new();
    if raw.is_empty() {
        return Ok(pairs);
    }

    let delimiters = memchr::memchr_iter(b'&', raw.as_bytes());
    let mut start = 0;
    for end in delimiters.chain(core::iter::once(raw.len())) {
        let segment = &raw[start..end];
        if !segment.is_empty() {
            pairs.push(parse_segment(segment, start, charset)?);
        } else if options.empty_segments == EmptySegments::Keep {
            pairs.push(QueryPair::bare(String::new()));
        }
        start = end + 1;
    }

    Ok(pairs)
}

/// Decode one `key[=value]` segment found at `base` in the raw query
fn parse_segment(segment: &str, base: usize, charset: Charset) -> Result<QueryPair> {
    let (key, value) = split_segment(segment);

    let key = percent_decode(key, charset).map_err(|e| e.shift(base))?;
    let value = match value {
        Some(value) => {
            let value_base = base + segment.len() - value.len();
            Some(
                percent_decode(value, charset)
                    .map_err(|e| e.shift(value_base))?
                    .into_owned(),
            )
        }
        None => None,
    };

    Ok(QueryPair::from_parts(Some(key.into_owned()), value))
}
