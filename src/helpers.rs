use std::borrow::Cow;

/// Prune fragment (#hash) from URI string
/// Returns (`uri_without_fragment`, `fragment_without_hash`)
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Prune query (?search) from a URI string that has no fragment left
/// Returns (`uri_without_query`, `query_without_question_mark`)
pub fn prune_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Position of the first "/", "?" or "#", or the input length
pub fn find_authority_end(input: &str) -> usize {
    memchr::memchr3(b'/', b'?', b'#', input.as_bytes()).unwrap_or(input.len())
}

/// ASCII-lowercase without allocating when already lower-case
pub fn ascii_lowercase(input: &str) -> Cow<'_, str> {
    if input.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(input.to_ascii_lowercase())
    } else {
        Cow::Borrowed(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_fragment() {
        assert_eq!(prune_fragment("a/b#frag"), ("a/b", Some("frag")));
        assert_eq!(prune_fragment("a/b#"), ("a/b", Some("")));
        assert_eq!(prune_fragment("a/b"), ("a/b", None));
        assert_eq!(prune_fragment("a#b#c"), ("a", Some("b#c")));
    }

    #[test]
    fn test_prune_query() {
        assert_eq!(prune_query("/p?x=1?y"), ("/p", Some("x=1?y")));
        assert_eq!(prune_query("/p"), ("/p", None));
    }

    #[test]
    fn test_find_authority_end() {
        assert_eq!(find_authority_end("example.com/path"), 11);
        assert_eq!(find_authority_end("example.com?q"), 11);
        assert_eq!(find_authority_end("example.com"), 11);
    }

    #[test]
    fn test_ascii_lowercase() {
        assert!(matches!(ascii_lowercase("http"), Cow::Borrowed("http")));
        assert_eq!(ascii_lowercase("HTTP"), "http");
        assert_eq!(ascii_lowercase("ExAmPlE.CoM"), "example.com");
    }
}
