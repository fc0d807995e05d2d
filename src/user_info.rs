use crate::checkers::{is_valid_password, is_valid_user};
use crate::error::{Argument, Error, Result};
use core::str::FromStr;

/// The `user[:password]` credential segment of an authority.
///
/// Values are immutable: every `with_*` call returns a modified copy.
///
/// # Examples
///
/// ```
/// use uri_kit::UserInfo;
///
/// let user_info: UserInfo = "username:password".parse().unwrap();
/// assert_eq!(user_info.user(), "username");
/// assert_eq!(user_info.password(), Some("password"));
///
/// let anonymous = user_info.with_password(None).unwrap();
/// assert_eq!(anonymous.to_string(), "username");
/// assert_eq!(user_info.to_string(), "username:password");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UserInfo {
    user: Option<String>,
    password: Option<String>,
}

impl UserInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw user and password values.
    ///
    /// Without a user the password is dropped and the result is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for [`Argument::Components`], wrapping the
    /// error of the rejected user or password.
    pub fn from_parts(user: Option<&str>, password: Option<&str>) -> Result<Self> {
        Self::from_raw(user, password).map_err(|e| Error::invalid(Argument::Components).caused_by(e))
    }

    /// Same as `from_parts`, reporting the rejected value directly
    pub(crate) fn from_raw(user: Option<&str>, password: Option<&str>) -> Result<Self> {
        let Some(user) = user else {
            return Ok(Self::new());
        };
        Self::new().with_user(user)?.with_password(password)
    }

    /// User name, empty when absent
    pub fn user(&self) -> &str {
        self.user.as_deref().unwrap_or_default()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.user.is_none()
    }

    /// Return a copy with the given user; an empty user clears it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the user holds ":" or an authority delimiter.
    pub fn with_user(&self, user: &str) -> Result<Self> {
        if !is_valid_user(user) {
            return Err(Error::invalid(Argument::User));
        }
        Ok(Self {
            user: (!user.is_empty()).then(|| user.to_string()),
            password: self.password.clone(),
        })
    }

    /// Return a copy with the given password, `None` removes it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the password holds an authority delimiter.
    pub fn with_password(&self, password: Option<&str>) -> Result<Self> {
        if password.is_some_and(|password| !is_valid_password(password)) {
            return Err(Error::invalid(Argument::Password));
        }
        Ok(Self {
            user: self.user.clone(),
            password: password.map(ToString::to_string),
        })
    }
}

impl FromStr for UserInfo {
    type Err = Error;

    /// Split at the first ":"; an empty user part yields an empty value.
    fn from_str(s: &str) -> Result<Self> {
        let (user, password) = match s.split_once(':') {
            Some((user, password)) => (user, Some(password)),
            None => (s, None),
        };
        Self::from_raw((!user.is_empty()).then_some(user), password)
    }
}

impl TryFrom<&str> for UserInfo {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl core::fmt::Display for UserInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Some(user) = &self.user else {
            return Ok(());
        };
        f.write_str(user)?;
        if let Some(password) = &self.password {
            write!(f, ":{password}")?;
        }
        Ok(())
    }
}
