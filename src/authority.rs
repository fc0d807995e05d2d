use crate::checkers::{is_valid_host, parse_port};
use crate::error::{Argument, Error, Result};
use crate::helpers::ascii_lowercase;
use crate::parser::{RawAuthority, decompose};
use crate::user_info::UserInfo;
use core::str::FromStr;

/// Raw, unencoded authority values keyed like a component map.
///
/// `port` is text so that the numeric coercion of [`Authority::from_parts`] applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorityParts {
    pub user: Option<String>,
    pub pass: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
}

impl AuthorityParts {
    pub fn new() -> Self {
        Self::default()
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
}

/// The `[userinfo@]host[:port]` segment of a URI.
///
/// The port is serialized whenever it is set; standard-port elision is the
/// business of [`Uri`](crate::Uri).
///
/// # Examples
///
/// ```
/// use uri_kit::Authority;
///
/// let authority: Authority = "username:password@example.com:80".parse().unwrap();
/// assert_eq!(authority.user_info(), "username:password");
/// assert_eq!(authority.host(), "example.com");
/// assert_eq!(authority.port(), Some(80));
/// assert_eq!(authority.to_string(), "username:password@example.com:80");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Authority {
    user_info: UserInfo,
    host: Option<String>,
    port: Option<u16>,
}

impl Authority {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a component map: host first, then user-info, then port.
    ///
    /// Without a host the result is the empty authority.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for [`Argument::Components`], wrapping the
    /// error of the first rejected value (a non-numeric port included).
    pub fn from_parts(parts: &AuthorityParts) -> Result<Self> {
        let Some(host) = &parts.host else {
            return Ok(Self::new());
        };
        Self::populate(parts, host).map_err(|e| Error::invalid(Argument::Components).caused_by(e))
    }

    fn populate(parts: &AuthorityParts, host: &str) -> Result<Self> {
        let mut authority = Self::new().with_host(host)?;
        if parts.user.is_some() {
            let user_info = UserInfo::from_raw(parts.user.as_deref(), parts.pass.as_deref())?;
            authority = authority.with_user_info_value(user_info);
        }
        if let Some(port) = &parts.port {
            let port = parse_port(port).ok_or_else(|| Error::invalid(Argument::Port))?;
            authority = authority.with_port(Some(port));
        }
        Ok(authority)
    }

    /// Validate and store pieces produced by the decomposer
    pub(crate) fn from_raw(raw: &RawAuthority<'_>) -> Result<Self> {
        let user_info = UserInfo::from_raw(raw.user, raw.password)?;
        Ok(Self::new()
            .with_host(raw.host)?
            .with_user_info_value(user_info)
            .with_port(raw.port))
    }

    /// User-info in `user[:password]` form, empty when absent
    pub fn user_info(&self) -> String {
        self.user_info.to_string()
    }

    pub fn user_info_component(&self) -> &UserInfo {
        &self.user_info
    }

    /// Host as stored, empty when absent
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or_default()
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// True when the authority serializes to nothing
    pub fn is_empty(&self) -> bool {
        self.host().is_empty()
    }

    /// Return a copy with the user-info parsed from `user_info`; `None` removes it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the user or password is rejected.
    pub fn with_user_info(&self, user_info: Option<&str>) -> Result<Self> {
        let user_info = match user_info {
            Some(text) => text.parse::<UserInfo>()?,
            None => UserInfo::new(),
        };
        Ok(self.with_user_info_value(user_info))
    }

    #[must_use]
    pub(crate) fn with_user_info_value(&self, user_info: UserInfo) -> Self {
        Self {
            user_info,
            ..self.clone()
        }
    }

    /// Return a copy with the given host. An empty host is legal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the host holds an authority delimiter,
    /// or ":" / "[" / "]" outside a bracketed IP literal.
    pub fn with_host(&self, host: &str) -> Result<Self> {
        if !is_valid_host(host) {
            return Err(Error::invalid(Argument::Host));
        }
        Ok(Self {
            host: Some(host.to_string()),
            ..self.clone()
        })
    }

    #[must_use]
    pub fn with_port(&self, port: Option<u16>) -> Self {
        Self {
            port,
            ..self.clone()
        }
    }

    /// Copy with a lower-cased host and the given (already elided) port
    pub(crate) fn canonical(&self, port: Option<u16>) -> Self {
        Self {
            user_info: self.user_info.clone(),
            host: self
                .host
                .as_deref()
                .map(|host| ascii_lowercase(host).into_owned()),
            port,
        }
    }
}

impl FromStr for Authority {
    type Err = Error;

    /// Parse `[userinfo@]host[:port]`, with or without a leading `//`.
    fn from_str(s: &str) -> Result<Self> {
        let wrap = |e: Error| Error::invalid(Argument::Authority).caused_by(e);

        let marked;
        let input = if !s.is_empty() && !s.contains("//") {
            marked = format!("//{s}");
            marked.as_str()
        } else {
            s
        };

        let raw = decompose(input).map_err(wrap)?;
        match raw.authority {
            Some(raw) => Self::from_raw(&raw).map_err(wrap),
            None => Ok(Self::new()),
        }
    }
}

impl TryFrom<&str> for Authority {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl core::fmt::Display for Authority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        if !self.user_info.is_empty() {
            write!(f, "{}@", self.user_info)?;
        }
        f.write_str(self.host())?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts() {
        let cases = [
            (AuthorityParts::new(), "", "", None, ""),
            (
                AuthorityParts::new().host("example.com"),
                "",
                "example.com",
                None,
                "example.com",
            ),
            (
                AuthorityParts::new().user("username").host("example.com"),
                "username",
                "example.com",
                None,
                "username@example.com",
            ),
            (
                AuthorityParts::new().pass("password").host("example.com"),
                "",
                "example.com",
                None,
                "example.com",
            ),
            (
                AuthorityParts::new()
                    .user("username")
                    .pass("password")
                    .host("example.com"),
                "username:password",
                "example.com",
                None,
                "username:password@example.com",
            ),
            (
                AuthorityParts::new()
                    .user("username")
                    .pass("password")
                    .host("example.com")
                    .port("80"),
                "username:password",
                "example.com",
                Some(80),
                "username:password@example.com:80",
            ),
        ];
        for (parts, user_info, host, port, output) in cases {
            let authority = Authority::from_parts(&parts).unwrap();
            assert_eq!(authority.user_info(), user_info);
            assert_eq!(authority.host(), host);
            assert_eq!(authority.port(), port);
            assert_eq!(authority.to_string(), output);
        }
    }

    #[test]
    fn test_from_parts_without_host_ignores_the_rest() {
        let parts = AuthorityParts::new().user("username").port("8080");
        let authority = Authority::from_parts(&parts).unwrap();
        assert_eq!(authority, Authority::new());
    }

    #[test]
    fn test_from_parts_rejects_invalid_values() {
        let cases = [
            (AuthorityParts::new().host("exa/mple"), Argument::Host),
            (
                AuthorityParts::new().host("example.com").user("us@er"),
                Argument::User,
            ),
            (
                AuthorityParts::new().host("example.com").port("http"),
                Argument::Port,
            ),
            (
                AuthorityParts::new().host("example.com").port("70000"),
                Argument::Port,
            ),
        ];
        for (parts, argument) in cases {
            let err = Authority::from_parts(&parts).unwrap_err();
            assert_eq!(err.to_string(), "Invalid array argument");
            assert_eq!(err.cause(), Some(&Error::invalid(argument)));
        }
    }

    #[test]
    fn test_empty_host_hides_everything() {
        let authority = Authority::new()
            .with_user_info(Some("user:pass"))
            .unwrap()
            .with_port(Some(8080));
        assert_eq!(authority.to_string(), "");

        let authority = authority.with_host("").unwrap();
        assert_eq!(authority.to_string(), "");
        assert!(authority.is_empty());
    }

    #[test]
    fn test_with_does_not_mutate() {
        let original = Authority::new().with_host("example.com").unwrap();
        let with_port = original.with_port(Some(8443));
        let with_user = with_port.with_user_info(Some("admin")).unwrap();

        assert_eq!(original.to_string(), "example.com");
        assert_eq!(with_port.to_string(), "example.com:8443");
        assert_eq!(with_user.to_string(), "admin@example.com:8443");
        assert_eq!(with_user.with_user_info(None).unwrap().to_string(), "example.com:8443");
    }

    #[test]
    fn test_with_host_rejects_delimiters() {
        let authority = Authority::new();
        assert_eq!(
            authority.with_host("example.com:80").unwrap_err(),
            Error::invalid(Argument::Host)
        );
        assert!(authority.with_host("[::1]").is_ok());
        assert!(authority.with_host("a?b").is_err());
    }
}
