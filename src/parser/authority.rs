use crate::checkers::parse_port;
use crate::error::{Error, Malformed, Result};

/// Authority pieces borrowed from the input, not yet validated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawAuthority<'a> {
    pub user: Option<&'a str>,
    pub password: Option<&'a str>,
    pub host: &'a str,
    pub port: Option<u16>,
}

/// Split host string into hostname and optional port parts.
/// Bracketed IP literals keep their brackets.
fn split_host_port(host: &str) -> Result<(&str, Option<&str>)> {
    if host.starts_with('[') {
        let Some(bracket_end) = host.find(']') else {
            return Err(Error::malformed(Malformed::UnclosedIpLiteral));
        };
        let literal = &host[..=bracket_end];
        let rest = &host[bracket_end + 1..];
        if rest.is_empty() {
            return Ok((literal, None));
        }
        return match rest.strip_prefix(':') {
            Some(port) => Ok((literal, Some(port))),
            None => Err(Error::malformed(Malformed::UnclosedIpLiteral)),
        };
    }

    Ok(match host.rfind(':') {
        Some(colon_pos) => (&host[..colon_pos], Some(&host[colon_pos + 1..])),
        None => (host, None),
    })
}

/// Split `[user[:password]@]host[:port]`.
///
/// User-info ends at the last "@"; an empty port (`host:`) counts as absent.
pub fn split_authority(authority: &str) -> Result<RawAuthority<'_>> {
    let (user_info, host_port) = match authority.rfind('@') {
        Some(at) => (Some(&authority[..at]), &authority[at + 1..]),
        None => (None, authority),
    };

    let (user, password) = match user_info {
        Some(user_info) => match user_info.split_once(':') {
            Some((user, password)) => (Some(user), Some(password)),
            None => (Some(user_info), None),
        },
        None => (None, None),
    };

    let (host, port) = split_host_port(host_port)?;
    let port = match port {
        Some("") | None => None,
        Some(port) => {
            Some(parse_port(port).ok_or_else(|| Error::malformed(Malformed::InvalidPort))?)
        }
    };

    if host.is_empty() && (user_info.is_some() || port.is_some()) {
        return Err(Error::malformed(Malformed::MissingHost));
    }

    Ok(RawAuthority {
        user,
        password,
        host,
        port,
    })
}
