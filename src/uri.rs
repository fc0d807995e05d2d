use crate::authority::Authority;
use crate::checkers::{is_valid_scheme, parse_port};
use crate::error::{Argument, Error, Malformed, Result};
use crate::helpers::ascii_lowercase;
use crate::parser::{RawUri, decompose};
use crate::percent_encode::{encode_fragment, encode_path, encode_query};
use crate::query::Query;
use crate::scheme::is_standard_port;
use crate::user_info::UserInfo;
use core::str::FromStr;
use std::borrow::Cow;

/// Raw, unencoded URI values keyed like a component map.
///
/// `port` is text so that the numeric coercion of [`Uri::from_parts`] applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UriParts {
    pub scheme: Option<String>,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
    pub path: Option<String>,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl UriParts {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    #[must_use]
    pub fn pass(mut self, pass: impl Into<String>) -> Self {
        self.pass = Some(pass.into());
        self
    }

    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    #[must_use]
    pub fn port(mut self, port: impl ToString) -> Self {
        self.port = Some(port.to_string());
        self
    }

    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    #[must_use]
    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }
}

/// An immutable URI value.
///
/// Components are stored as given and canonicalized on read: scheme and host
/// are lower-cased, a port equal to the scheme's standard port is elided, and
/// path, query and fragment are percent-encoded (existing `%XX` escapes are
/// kept). Every `with_*` call returns a modified copy and leaves the receiver
/// untouched.
///
/// # Examples
///
/// ```
/// use uri_kit::Uri;
///
/// let uri = Uri::parse("HTTP://Example.com:80/a b?x=[1]#top").unwrap();
/// assert_eq!(uri.scheme(), "http");
/// assert_eq!(uri.host(), "example.com");
/// assert_eq!(uri.port(), None);
/// assert_eq!(uri.path(), "/a%20b");
/// assert_eq!(uri.to_string(), "http://example.com/a%20b?x=%5B1%5D#top");
///
/// let moved = uri.with_port(Some(8080)).with_fragment("");
/// assert_eq!(moved.to_string(), "http://example.com:8080/a%20b?x=%5B1%5D");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Uri {
    scheme: Option<String>,
    authority: Authority,
    path: Option<String>,
    query: Option<String>,
    fragment: Option<String>,
}

impl Uri {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a URI string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedUri`] if the string cannot be decomposed, or if a
    /// decomposed component is rejected (the rejection is chained as the cause).
    pub fn parse(input: &str) -> Result<Self> {
        decompose(input)
            .and_then(|raw| {
                Self::from_raw(&raw).map_err(|e| {
                    Error::malformed(Malformed::InvalidComponent).caused_by(e)
                })
            })
            .inspect_err(|error| tracing::debug!(input, %error, "rejected URI"))
    }

    /// Build from a component map, in the order scheme, user-info, host, port,
    /// path, query, fragment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for [`Argument::Components`], wrapping the
    /// error of the first rejected value (a non-numeric port included).
    pub fn from_parts(parts: &UriParts) -> Result<Self> {
        Self::populate(parts).map_err(|e| Error::invalid(Argument::Components).caused_by(e))
    }

    fn populate(parts: &UriParts) -> Result<Self> {
        let mut uri = Self::new();
        if let Some(scheme) = &parts.scheme {
            uri = uri.with_scheme(scheme)?;
        }
        if parts.user.is_some() {
            let user_info = UserInfo::from_raw(parts.user.as_deref(), parts.pass.as_deref())?;
            uri.authority = uri.authority.with_user_info_value(user_info);
        }
        if let Some(host) = &parts.host {
            uri = uri.with_host(host)?;
        }
        if let Some(port) = &parts.port {
            let port = parse_port(port).ok_or_else(|| Error::invalid(Argument::Port))?;
            uri = uri.with_port(Some(port));
        }
        if let Some(path) = &parts.path {
            uri = uri.with_path(path);
        }
        if let Some(query) = &parts.query {
            uri = uri.with_query(query);
        }
        if let Some(fragment) = &parts.fragment {
            uri = uri.with_fragment(fragment);
        }
        Ok(uri)
    }

    fn from_raw(raw: &RawUri<'_>) -> Result<Self> {
        let mut uri = Self::new();
        if let Some(scheme) = raw.scheme {
            uri = uri.with_scheme(scheme)?;
        }
        if let Some(authority) = &raw.authority {
            uri.authority = Authority::from_raw(authority)?;
        }
        if !raw.path.is_empty() {
            uri = uri.with_path(raw.path);
        }
        if let Some(query) = raw.query {
            uri = uri.with_query(query);
        }
        if let Some(fragment) = raw.fragment {
            uri = uri.with_fragment(fragment);
        }
        Ok(uri)
    }

    /// Scheme, lower-cased; empty when absent
    pub fn scheme(&self) -> Cow<'_, str> {
        ascii_lowercase(self.scheme.as_deref().unwrap_or_default())
    }

    /// Serialized authority with lower-cased host and the standard port elided
    pub fn authority(&self) -> String {
        self.authority.canonical(self.port()).to_string()
    }

    /// The authority component as stored, port included even when standard
    pub fn authority_component(&self) -> &Authority {
        &self.authority
    }

    /// User-info in `user[:password]` form, empty when absent
    pub fn user_info(&self) -> String {
        self.authority.user_info()
    }

    /// Host, lower-cased; empty when absent
    pub fn host(&self) -> Cow<'_, str> {
        ascii_lowercase(self.authority.host())
    }

    /// Port, or `None` when unset or equal to the scheme's standard port
    pub fn port(&self) -> Option<u16> {
        let port = self.authority.port()?;
        if is_standard_port(&self.scheme(), port) {
            None
        } else {
            Some(port)
        }
    }

    /// Path, percent-encoded
    pub fn path(&self) -> Cow<'_, str> {
        encode_path(self.path.as_deref().unwrap_or_default())
    }

    /// Query without the leading "?", percent-encoded
    pub fn query(&self) -> Cow<'_, str> {
        encode_query(self.query.as_deref().unwrap_or_default())
    }

    /// Fragment without the leading "#", percent-encoded
    pub fn fragment(&self) -> Cow<'_, str> {
        encode_fragment(self.fragment.as_deref().unwrap_or_default())
    }

    /// Decode the query into named arguments
    pub fn query_params(&self) -> Query {
        Query::deserialize(&self.query())
    }

    /// Return a copy with the given scheme; an empty scheme removes it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the scheme is not
    /// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    pub fn with_scheme(&self, scheme: &str) -> Result<Self> {
        if !scheme.is_empty() && !is_valid_scheme(scheme) {
            return Err(Error::invalid(Argument::Scheme));
        }
        Ok(Self {
            scheme: (!scheme.is_empty()).then(|| scheme.to_string()),
            ..self.clone()
        })
    }

    /// Return a copy with the given credentials; an empty user removes them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the user or password is rejected.
    pub fn with_user_info(&self, user: &str, password: Option<&str>) -> Result<Self> {
        let user_info = UserInfo::new().with_user(user)?.with_password(password)?;
        Ok(Self {
            authority: self.authority.with_user_info_value(user_info),
            ..self.clone()
        })
    }

    /// Return a copy with the given host.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the host is rejected (see [`Authority::with_host`]).
    pub fn with_host(&self, host: &str) -> Result<Self> {
        Ok(Self {
            authority: self.authority.with_host(host)?,
            ..self.clone()
        })
    }

    #[must_use]
    pub fn with_port(&self, port: Option<u16>) -> Self {
        Self {
            authority: self.authority.with_port(port),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_path(&self, path: &str) -> Self {
        Self {
            path: Some(path.to_string()),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_query(&self, query: &str) -> Self {
        Self {
            query: Some(query.to_string()),
            ..self.clone()
        }
    }

    /// Return a copy whose query is the form serialization of `query`
    #[must_use]
    pub fn with_query_params(&self, query: &Query) -> Self {
        self.with_query(&query.serialize())
    }

    #[must_use]
    pub fn with_fragment(&self, fragment: &str) -> Self {
        Self {
            fragment: Some(fragment.to_string()),
            ..self.clone()
        }
    }
}

impl FromStr for Uri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

fn first_segment_has_colon(path: &str) -> bool {
    let segment_end = memchr::memchr(b'/', path.as_bytes()).unwrap_or(path.len());
    memchr::memchr(b':', &path.as_bytes()[..segment_end]).is_some()
}

/// `scheme:[//authority][/]path[?query][#fragment]`
///
/// Leading slashes of the path collapse to one. A rootless path gets a "/"
/// only when an authority precedes it, and a "./" prefix when it has no
/// scheme and its first segment holds a ":".
impl core::fmt::Display for Uri {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let scheme = self.scheme();
        if !scheme.is_empty() {
            write!(f, "{scheme}:")?;
        }

        let authority = self.authority();
        if !authority.is_empty() {
            write!(f, "//{authority}")?;
        }

        let path = self.path();
        if !path.is_empty() {
            let relative = path.trim_start_matches('/');
            if relative.len() != path.len() || !authority.is_empty() {
                f.write_str("/")?;
            } else if scheme.is_empty() && first_segment_has_colon(relative) {
                // "a:b" would read back as scheme "a"
                f.write_str("./")?;
            }
            f.write_str(relative)?;
        }

        let query = self.query();
        if !query.is_empty() {
            write!(f, "?{query}")?;
        }

        let fragment = self.fragment();
        if !fragment.is_empty() {
            write!(f, "#{fragment}")?;
        }

        Ok(())
    }
}
