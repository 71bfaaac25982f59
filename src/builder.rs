use crate::character_sets::SafeChars;
use crate::charset::Charset;
use crate::compat::String;
use crate::pair::QueryPair;
use crate::percent::percent_encode_into;

/// Serialize pairs into a query string (without a leading `?`).
///
/// Pairs are written in iteration order. A pair without a key is skipped,
/// a key without a value is written bare, and an empty value keeps its `=`.
/// With `strict`, every character outside the RFC 3986 unreserved set is
/// escaped.
///
/// A bare empty key is written as an empty segment, which
/// [`EmptySegments::Skip`](crate::EmptySegments::Skip) parsing drops.
pub fn build_query<'a, I>(pairs: I, charset: Charset, strict: bool) -> String
where
    I: IntoIterator<Item = &'a QueryPair>,
{
    let mut result = String::new();
    build_query_into(&mut result, pairs, charset, strict);
    result
}

/// Serialize pairs directly into `buffer`
pub fn build_query_into<'a, I>(buffer: &mut String, pairs: I, charset: Charset, strict: bool)
where
    I: IntoIterator<Item = &'a QueryPair>,
{
    let (key_policy, value_policy) = SafeChars::for_build(strict);

    let mut first = true;
    for pair in pairs {
        let Some(key) = pair.key() else {
            continue;
        };
        if !first {
            buffer.push('&');
        }
        first = false;

        percent_encode_into(buffer, key, charset, key_policy);
        if let Some(value) = pair.value() {
            buffer.push('=');
            percent_encode_into(buffer, value, charset, value_policy);
        }
    }
}
