/// Prune fragment (#hash) from a URL or query string
/// Returns (`input_without_fragment`, `fragment_without_hash`)
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Locate the query part of something that may be a whole URL.
///
/// Text after the first `?` is the query. Without a `?`, an input that has a
/// scheme separator (`://`) is a URL with no query, anything else is taken as
/// a bare query string.
pub fn query_part(input: &str) -> Option<&str> {
    let (input, _) = prune_fragment(input);
    if let Some(pos) = memchr::memchr(b'?', input.as_bytes()) {
        return Some(&input[pos + 1..]);
    }
    if memchr::memmem::find(input.as_bytes(), b"://").is_some() {
        return None;
    }
    Some(input)
}

/// Split a segment at its first `=`
/// Returns (`key`, `value`), with no value when the segment has no `=`
pub fn split_segment(segment: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'=', segment.as_bytes()).map_or((segment, None), |pos| {
        (&segment[..pos], Some(&segment[pos + 1..]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_fragment() {
        assert_eq!(prune_fragment("a=1#top"), ("a=1", Some("top")));
        assert_eq!(prune_fragment("a=1"), ("a=1", None));
    }

    #[test]
    fn test_query_part() {
        assert_eq!(
            query_part("http://192.168.1.1:8080/pc?=d52i=72e54"),
            Some("=d52i=72e54")
        );
        assert_eq!(query_part("https://www.baidu.com/proxy"), None);
        assert_eq!(query_part("https://example.com/?"), Some(""));
        assert_eq!(query_part("https://example.com/?a=1#frag"), Some("a=1"));
        assert_eq!(query_part("a=1&b=2"), Some("a=1&b=2"));
        assert_eq!(query_part("?a=1"), Some("a=1"));
    }

    #[test]
    fn test_split_segment() {
        assert_eq!(split_segment("b=111=="), ("b", Some("111==")));
        assert_eq!(split_segment("=x=y"), ("", Some("x=y")));
        assert_eq!(split_segment("key="), ("key", Some("")));
        assert_eq!(split_segment("key"), ("key", None));
    }
}
