/// The value that was rejected by an [`Error::InvalidArgument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    /// Scheme name (builder or port registry)
    Scheme,
    /// User name of the user-info
    User,
    /// Password of the user-info
    Password,
    /// Host name or IP literal
    Host,
    /// Port number given as text
    Port,
    /// An authority string as a whole
    Authority,
    /// A component map handed to one of the `from_parts` constructors
    Components,
}

/// Why an input string could not be decomposed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Malformed {
    /// The `//` authority marker is followed by nothing at all
    EmptyAuthority,
    /// User-info or port is present but the host is empty
    MissingHost,
    /// The port is not a decimal number in `0..=65535`
    InvalidPort,
    /// A `[` IP literal is not closed, or is followed by something other than `:port`
    UnclosedIpLiteral,
    /// A decomposed component was rejected by its own validation
    InvalidComponent,
}

/// Errors raised while building or parsing URI values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A builder, component map or registry call received a value of the wrong shape
    InvalidArgument {
        argument: Argument,
        cause: Option<Box<Error>>,
    },
    /// The input string cannot be structurally decomposed
    MalformedUri {
        reason: Malformed,
        cause: Option<Box<Error>>,
    },
}

impl Error {
    pub(crate) fn invalid(argument: Argument) -> Self {
        Self::InvalidArgument {
            argument,
            cause: None,
        }
    }

    pub(crate) fn malformed(reason: Malformed) -> Self {
        Self::MalformedUri {
            reason,
            cause: None,
        }
    }

    /// Attach the error that triggered this one
    #[must_use]
    pub(crate) fn caused_by(mut self, error: Error) -> Self {
        match &mut self {
            Self::InvalidArgument { cause, .. } | Self::MalformedUri { cause, .. } => {
                *cause = Some(Box::new(error));
            }
        }
        self
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedUri { .. })
    }

    /// The chained cause, if any
    pub fn cause(&self) -> Option<&Error> {
        match self {
            Self::InvalidArgument { cause, .. } | Self::MalformedUri { cause, .. } => {
                cause.as_deref()
            }
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidArgument { argument, .. } => {
                let msg = match argument {
                    Argument::Scheme => "Invalid scheme argument",
                    Argument::User => "Invalid user argument",
                    Argument::Password => "Invalid password argument",
                    Argument::Host => "Invalid host argument",
                    Argument::Port => "Invalid port argument",
                    Argument::Authority => "Invalid authority argument",
                    Argument::Components => "Invalid array argument",
                };
                f.write_str(msg)
            }
            Self::MalformedUri { reason, .. } => {
                let msg = match reason {
                    Malformed::EmptyAuthority => "Malformed URI: empty authority",
                    Malformed::MissingHost => "Malformed URI: missing host",
                    Malformed::InvalidPort => "Malformed URI: invalid port",
                    Malformed::UnclosedIpLiteral => "Malformed URI: unclosed IP literal",
                    Malformed::InvalidComponent => "Malformed URI: invalid component",
                };
                f.write_str(msg)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause().map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// Result type for URI operations
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::invalid(Argument::Components).to_string(),
            "Invalid array argument"
        );
        assert_eq!(
            Error::malformed(Malformed::EmptyAuthority).to_string(),
            "Malformed URI: empty authority"
        );
    }

    #[test]
    fn test_cause_chain() {
        let err = Error::invalid(Argument::Components).caused_by(Error::invalid(Argument::Port));
        assert!(err.is_invalid_argument());
        assert_eq!(err.cause(), Some(&Error::invalid(Argument::Port)));
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("Invalid port argument")
        );
        assert!(Error::invalid(Argument::Port).source().is_none());
    }
}
