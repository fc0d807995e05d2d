use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::borrow::Cow;

// Encode sets following RFC 3986
// Based on https://www.rfc-editor.org/rfc/rfc3986#section-3.3

/// Path percent-encode set
/// Everything except unreserved, sub-delims, ":", "@" and "/".
/// "%" stays in the set; valid escapes are skipped before encoding.
pub const PATH_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@')
    .remove(b'/');

/// Query percent-encode set
/// Path + "?" allowed
pub const QUERY_SET: &AsciiSet = &PATH_SET.remove(b'?');

/// Fragment percent-encode set (same as query)
pub const FRAGMENT_SET: &AsciiSet = QUERY_SET;

/// Form (`application/x-www-form-urlencoded`) set
/// Only alphanumerics and "-", "_", "." pass through; spaces are handled separately
pub const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Check for `%XX` with two hex digits at `pos`
fn is_valid_escape(bytes: &[u8], pos: usize) -> bool {
    bytes.get(pos + 1).is_some_and(u8::is_ascii_hexdigit)
        && bytes.get(pos + 2).is_some_and(u8::is_ascii_hexdigit)
}

/// Encode a segment that holds no valid escape, returns whether anything changed
fn push_encoded(buffer: &mut String, segment: &str, encode_set: &'static AsciiSet) -> bool {
    let encoded: Cow<'_, str> = utf8_percent_encode(segment, encode_set).into();
    buffer.push_str(&encoded);
    matches!(encoded, Cow::Owned(_))
}

/// Percent-encode every byte in `encode_set`, leaving valid `%XX` escapes untouched.
/// A lone "%" counts as data and becomes "%25".
pub fn encode_preserving_escapes<'a>(input: &'a str, encode_set: &'static AsciiSet) -> Cow<'a, str> {
    let bytes = input.as_bytes();
    let mut buffer = String::with_capacity(input.len());
    let mut changed = false;
    let mut copied = 0;

    for pos in memchr::memchr_iter(b'%', bytes) {
        if pos < copied || !is_valid_escape(bytes, pos) {
            continue;
        }
        changed |= push_encoded(&mut buffer, &input[copied..pos], encode_set);
        buffer.push_str(&input[pos..pos + 3]);
        copied = pos + 3;
    }
    changed |= push_encoded(&mut buffer, &input[copied..], encode_set);

    if changed {
        Cow::Owned(buffer)
    } else {
        Cow::Borrowed(input)
    }
}

pub fn encode_path(input: &str) -> Cow<'_, str> {
    encode_preserving_escapes(input, PATH_SET)
}

pub fn encode_query(input: &str) -> Cow<'_, str> {
    encode_preserving_escapes(input, QUERY_SET)
}

pub fn encode_fragment(input: &str) -> Cow<'_, str> {
    encode_preserving_escapes(input, FRAGMENT_SET)
}

/// Form-encode into buffer: spaces become "+", the rest follows `FORM_SET`
pub fn form_encode_into(buffer: &mut String, input: &str) {
    for (i, chunk) in input.split(' ').enumerate() {
        if i > 0 {
            buffer.push('+');
        }
        for encoded in utf8_percent_encode(chunk, FORM_SET) {
            buffer.push_str(encoded);
        }
    }
}

/// Decode a form-encoded component, "+" means space.
/// Invalid UTF-8 after decoding is replaced rather than rejected.
pub fn form_decode(input: &str) -> String {
    let spaced = if input.contains('+') {
        Cow::Owned(input.replace('+', " "))
    } else {
        Cow::Borrowed(input)
    };
    percent_encoding::percent_decode_str(&spaced)
        .decode_utf8_lossy()
        .into_owned()
}
