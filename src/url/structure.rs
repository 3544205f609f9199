//! Structural parsing of a normalized URL.
//!
//! Splits `scheme://[user-info@]host[:port][/path][?query][#fragment]` into its
//! raw components without decoding or re-encoding anything, then applies the
//! scheme and port policy.

use crate::error_handling::UrlError;
use crate::url::Protocol;

/// Raw components of a normalized URL, borrowed from it.
///
/// Byte offsets are kept so that character legality errors can be reported at
/// the right position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StructuralFields<'a> {
    pub scheme: &'a str,
    pub user_info: Option<&'a str>,
    pub host: &'a str,
    /// Numeric port as written; `None` when absent or empty.
    pub port: Option<i32>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
    /// Offset of the authority (`user-info@host:port`).
    pub authority_start: usize,
    pub authority: &'a str,
    pub path_start: usize,
    pub query_start: Option<usize>,
    pub fragment_start: Option<usize>,
}

fn syntax_error(message: impl Into<String>, input: &str) -> UrlError {
    UrlError::UrlSyntaxError {
        message: message.into(),
        input: input.to_string(),
    }
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Splits `normalized` into its components.
///
/// `input` is the original candidate, used in error messages.
///
/// # Errors
///
/// - `UrlSyntaxError` for a missing or malformed scheme, a missing `//`, or a
///   malformed IPv6 literal
/// - `InvalidPort` when the port token is not a number
pub(crate) fn split<'a>(normalized: &'a str, input: &str) -> Result<StructuralFields<'a>, UrlError> {
    let colon = normalized
        .find(':')
        .ok_or_else(|| syntax_error(format!("no protocol: {normalized}"), input))?;
    let scheme = &normalized[..colon];
    if !is_valid_scheme(scheme) {
        return Err(syntax_error(format!("Invalid protocol: {scheme}"), input));
    }

    let authority_start = colon + 3;
    if !normalized[colon + 1..].starts_with("//") {
        return Err(syntax_error(
            format!("Expected authority at index {authority_start}: {normalized}"),
            input,
        ));
    }

    // The fragment is cut off first, so '?' and '/' inside it belong to it
    let (before_fragment, fragment, fragment_start) = match normalized.find('#') {
        Some(hash) if hash >= authority_start => (
            &normalized[..hash],
            Some(&normalized[hash + 1..]),
            Some(hash + 1),
        ),
        _ => (normalized, None, None),
    };

    let authority_end = before_fragment[authority_start..]
        .find(['/', '?'])
        .map_or(before_fragment.len(), |i| authority_start + i);
    let authority = &before_fragment[authority_start..authority_end];

    let (path, query, query_start) = match before_fragment[authority_end..].find('?') {
        Some(i) => {
            let q = authority_end + i;
            (
                &before_fragment[authority_end..q],
                Some(&before_fragment[q + 1..]),
                Some(q + 1),
            )
        }
        None => (&before_fragment[authority_end..], None, None),
    };

    let (user_info, host_port) = match authority.split_once('@') {
        Some((user_info, host_port)) => (Some(user_info), host_port),
        None => (None, authority),
    };
    let (host, port_token) = split_host_port(host_port, input)?;
    let port = match port_token {
        None | Some("") => None,
        Some(token) => Some(token.parse::<i32>().map_err(|_| UrlError::InvalidPort {
            token: token.to_string(),
            input: input.to_string(),
        })?),
    };

    Ok(StructuralFields {
        scheme,
        user_info,
        host,
        port,
        path,
        query,
        fragment,
        authority_start,
        authority,
        path_start: authority_end,
        query_start,
        fragment_start,
    })
}

/// Splits `host[:port]`, keeping the colons of a bracketed IPv6 literal inside
/// the host.
fn split_host_port<'a>(
    host_port: &'a str,
    input: &str,
) -> Result<(&'a str, Option<&'a str>), UrlError> {
    if host_port.starts_with('[') {
        let close = host_port
            .find(']')
            .ok_or_else(|| syntax_error(format!("Invalid host: {host_port}"), input))?;
        let host = &host_port[..=close];
        let rest = &host_port[close + 1..];
        return match rest.strip_prefix(':') {
            Some(port) => Ok((host, Some(port))),
            None if rest.is_empty() => Ok((host, None)),
            None => Err(syntax_error(format!("Invalid authority: {host_port}"), input)),
        };
    }
    Ok(match host_port.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (host_port, None),
    })
}

/// Maps the scheme onto an allowed protocol.
///
/// The comparison is exact; schemes are never case-folded.
pub(crate) fn check_protocol(scheme: &str, input: &str) -> Result<Protocol, UrlError> {
    match scheme {
        "http" => Ok(Protocol::Http),
        "https" => Ok(Protocol::Https),
        _ => Err(UrlError::DisallowedProtocol {
            input: input.to_string(),
        }),
    }
}

/// Applies the port range policy.
///
/// `-1` is the grammar's "no port" sentinel and is accepted as absence; every
/// other value outside 1..=65535 is rejected.
pub(crate) fn check_port(port: Option<i32>, input: &str) -> Result<Option<u16>, UrlError> {
    match port {
        None | Some(-1) => Ok(None),
        Some(p) => u16::try_from(p)
            .ok()
            .filter(|p| *p != 0)
            .map(Some)
            .ok_or_else(|| UrlError::PortOutOfRange {
                port: p,
                input: input.to_string(),
            }),
    }
}
