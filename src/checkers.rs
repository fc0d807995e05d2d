use crate::character_sets::{ALPHA, is_authority_delimiter, is_in_class, is_scheme_byte};

/// Check a scheme against `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
pub fn is_valid_scheme(scheme: &str) -> bool {
    let bytes = scheme.as_bytes();
    let Some((&first, rest)) = bytes.split_first() else {
        return false;
    };
    is_in_class(first, ALPHA) && rest.iter().all(|&b| is_scheme_byte(b))
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok()
}

/// A host survives serialization if it holds no authority delimiter, and
/// keeps `:` `[` `]` inside a bracketed IP literal only.
pub fn is_valid_host(host: &str) -> bool {
    if host.bytes().any(is_authority_delimiter) {
        return false;
    }
    match host.strip_prefix('[') {
        Some(literal) => literal
            .strip_suffix(']')
            .is_some_and(|inner| !inner.contains(['[', ']'])),
        None => !host.contains([':', '[', ']']),
    }
}

/// User names end at the first `:`, so they may not contain one.
pub fn is_valid_user(user: &str) -> bool {
    !user.contains(':') && !user.bytes().any(is_authority_delimiter)
}

pub fn is_valid_password(password: &str) -> bool {
    !password.bytes().any(is_authority_delimiter)
}
