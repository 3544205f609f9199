//! Domain and registry suffix resolution.
//!
//! This module classifies a URL host and, for named hosts, derives the
//! registrable domain and its registry suffix from a Public Suffix List.
//!
//! Key functions:
//! - `classify_host()` - Tells localhost, IPv4 literals and named hosts apart
//! - `resolve()` - Computes the registrable domain and registry suffix of a host

mod suffix;

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error_handling::UrlError;

pub use suffix::{BundledSuffixList, LoadedSuffixList, SuffixList};

/// Syntactic dotted-quad check over ASCII digits; octet ranges are not validated.
static IPV4_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}$").expect("IPv4 pattern is valid")
});

const MAX_DOMAIN_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;

/// How a URL host is treated by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    /// Exactly `localhost`.
    Localhost,
    /// Four dot-separated groups of one to three digits.
    Ipv4Literal,
    /// Anything else; resolved through the suffix list.
    Named,
}

/// Registrable domain and registry suffix of a host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    pub domain: Option<String>,
    pub suffix: Option<String>,
}

/// Classifies a host as given in the URL authority.
pub fn classify_host(host: &str) -> HostKind {
    if host == "localhost" {
        HostKind::Localhost
    } else if IPV4_LITERAL.is_match(host) {
        HostKind::Ipv4Literal
    } else {
        HostKind::Named
    }
}

/// Resolves the registrable domain and registry suffix of `host`.
///
/// `input` is the original URL candidate, used in error messages only.
///
/// # Errors
///
/// - `DomainError` if the host is not a valid domain name
/// - `NotUnderRegistrySuffix` if no registry suffix matches, or if the host is
///   itself a registry suffix
pub fn resolve(list: &dyn SuffixList, host: &str, input: &str) -> Result<Resolution, UrlError> {
    match classify_host(host) {
        HostKind::Localhost => {
            return Ok(Resolution {
                domain: Some("localhost".to_string()),
                suffix: None,
            })
        }
        HostKind::Ipv4Literal => return Ok(Resolution::default()),
        HostKind::Named => {}
    }

    let name = lookup_name(host).map_err(|message| UrlError::DomainError {
        message,
        input: input.to_string(),
    })?;

    let not_under_suffix = || UrlError::NotUnderRegistrySuffix {
        host: host.to_string(),
        input: input.to_string(),
    };

    if !list.has_any_match(&name) {
        return Err(not_under_suffix());
    }
    let suffix = list
        .longest_matching_suffix(&name)
        .ok_or_else(not_under_suffix)?;

    // The host itself is a registry suffix: nothing to register below it
    if suffix.len() >= name.len() {
        return Err(not_under_suffix());
    }
    let above = &name[..name.len() - suffix.len() - 1];
    let label = above.rsplit('.').next().unwrap_or(above);
    let domain = format!("{label}.{suffix}");
    debug!("Resolved host {host} to domain {domain} under suffix {suffix}");

    Ok(Resolution {
        domain: Some(domain),
        suffix: Some(suffix),
    })
}

/// Converts a host into the lower-case ASCII name used for suffix lookups.
///
/// Internationalized names are converted to punycode. The returned error is
/// the message of the failure, without the provided-URL suffix.
fn lookup_name(host: &str) -> Result<String, String> {
    let invalid = || format!("Not a valid domain name: '{host}'");

    let trimmed = host.strip_suffix('.').unwrap_or(host);
    if trimmed.is_empty() || trimmed.contains('%') {
        return Err(invalid());
    }

    let name = match ::url::Host::parse(trimmed) {
        Ok(::url::Host::Domain(name)) => name,
        // IPv6 literals and non dotted-quad IPv4 forms (e.g. "1.2.3") are not names
        Ok(::url::Host::Ipv4(_)) | Ok(::url::Host::Ipv6(_)) => return Err(invalid()),
        Err(e) => return Err(format!("{} ({e})", invalid())),
    };

    if name.len() > MAX_DOMAIN_LENGTH {
        return Err(invalid());
    }
    let labels: Vec<&str> = name.split('.').collect();
    if !labels.iter().all(|label| is_valid_label(label)) {
        return Err(invalid());
    }
    // A numeric-looking final label would be an IP address fragment
    if labels
        .last()
        .and_then(|label| label.chars().next())
        .is_some_and(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }
    Ok(name)
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LENGTH
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
