use crate::checkers::is_valid_scheme;
use crate::error::{Argument, Error, Result};
use crate::helpers::ascii_lowercase;
use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};

/// Ports registered at process start
const DEFAULT_PORTS: [(&str, u16); 5] = [
    ("http", 80),
    ("https", 443),
    ("ws", 80),
    ("wss", 443),
    ("ftp", 21),
];

/// Lower-cased scheme name to standard port.
/// Only grows: entries can be overwritten, never removed.
static STANDARD_PORTS: LazyLock<RwLock<HashMap<String, u16>>> = LazyLock::new(|| {
    RwLock::new(
        DEFAULT_PORTS
            .iter()
            .map(|&(scheme, port)| (scheme.to_string(), port))
            .collect(),
    )
});

/// Register (or overwrite) the standard port of a scheme.
///
/// The scheme is matched case-insensitively from then on.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `scheme` is not a syntactically valid scheme name.
///
/// # Examples
///
/// ```
/// use uri_kit::{Uri, register_standard_port};
///
/// register_standard_port("Gopher", 70).unwrap();
/// let uri: Uri = "gopher://example.com:70/1".parse().unwrap();
/// assert_eq!(uri.port(), None);
/// assert_eq!(uri.to_string(), "gopher://example.com/1");
/// ```
pub fn register_standard_port(scheme: &str, port: u16) -> Result<()> {
    if !is_valid_scheme(scheme) {
        return Err(Error::invalid(Argument::Scheme));
    }
    let scheme = scheme.to_ascii_lowercase();
    tracing::trace!(%scheme, port, "registering standard port");
    STANDARD_PORTS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(scheme, port);
    Ok(())
}

/// Register several schemes at once, stopping at the first invalid one.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for the first invalid scheme name;
/// entries before it stay registered.
pub fn register_standard_ports<'a, I>(schemes: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, u16)>,
{
    schemes
        .into_iter()
        .try_for_each(|(scheme, port)| register_standard_port(scheme, port))
}

/// Standard port of a scheme, if one is registered
pub fn standard_port(scheme: &str) -> Option<u16> {
    let scheme = ascii_lowercase(scheme);
    STANDARD_PORTS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(scheme.as_ref())
        .copied()
}

pub fn is_scheme_registered(scheme: &str) -> bool {
    standard_port(scheme).is_some()
}

/// True iff `scheme` is registered and `port` is its standard port
pub fn is_standard_port(scheme: &str, port: u16) -> bool {
    standard_port(scheme) == Some(port)
}
