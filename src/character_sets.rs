/// ALPHA
pub const ALPHA: u8 = 1;
/// DIGIT
pub const DIGIT: u8 = 1 << 1;
/// "-" / "." / "_" / "~"
pub const UNRESERVED_MARK: u8 = 1 << 2;
/// "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="
pub const SUB_DELIM: u8 = 1 << 3;
/// Bytes that end or split an authority: "/" / "?" / "#" / "@"
pub const AUTHORITY_DELIM: u8 = 1 << 4;
/// "+" / "-" / "." allowed after the first scheme letter
pub const SCHEME_MARK: u8 = 1 << 5;

/// RFC 3986 byte classification, one bit set per class
const URI_CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] |= ALPHA;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] |= ALPHA;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] |= DIGIT;
        i += 1;
    }

    table[b'-' as usize] |= UNRESERVED_MARK | SCHEME_MARK;
    table[b'.' as usize] |= UNRESERVED_MARK | SCHEME_MARK;
    table[b'_' as usize] |= UNRESERVED_MARK;
    table[b'~' as usize] |= UNRESERVED_MARK;

    table[b'!' as usize] |= SUB_DELIM;
    table[b'$' as usize] |= SUB_DELIM;
    table[b'&' as usize] |= SUB_DELIM;
    table[b'\'' as usize] |= SUB_DELIM;
    table[b'(' as usize] |= SUB_DELIM;
    table[b')' as usize] |= SUB_DELIM;
    table[b'*' as usize] |= SUB_DELIM;
    table[b'+' as usize] |= SUB_DELIM | SCHEME_MARK;
    table[b',' as usize] |= SUB_DELIM;
    table[b';' as usize] |= SUB_DELIM;
    table[b'=' as usize] |= SUB_DELIM;

    table[b'/' as usize] |= AUTHORITY_DELIM;
    table[b'?' as usize] |= AUTHORITY_DELIM;
    table[b'#' as usize] |= AUTHORITY_DELIM;
    table[b'@' as usize] |= AUTHORITY_DELIM;

    table
};

/// Check whether a byte belongs to any of the given classes
pub fn is_in_class(b: u8, class: u8) -> bool {
    URI_CHAR_TABLE[b as usize] & class != 0
}

/// Check if a byte may appear after the first letter of a scheme
pub fn is_scheme_byte(b: u8) -> bool {
    is_in_class(b, ALPHA | DIGIT | SCHEME_MARK)
}

/// Check if a byte would end or split an authority
pub fn is_authority_delimiter(b: u8) -> bool {
    is_in_class(b, AUTHORITY_DELIM)
}
