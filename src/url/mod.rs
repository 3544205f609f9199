//! URL validation and decomposition.
//!
//! A candidate string goes through four stages, stopping at the first failure:
//! 1. normalization (trim, default `http://` scheme)
//! 2. structural split, character legality, scheme and port policy
//! 3. domain and registry suffix resolution of the host
//! 4. canonical URL reconstruction
//!
//! ```
//! use url_validator::parse_url;
//!
//! let url = parse_url("qwer.google.co.uk/search?q=rust")?;
//! assert_eq!(url.canonical_url(), "http://qwer.google.co.uk/search?q=rust");
//! assert_eq!(url.domain(), Some("google.co.uk"));
//! assert_eq!(url.suffix(), Some("co.uk"));
//! # Ok::<(), url_validator::UrlError>(())
//! ```

mod canonical;
mod normalize;
mod strict;
mod structure;

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use log::debug;
use serde::Serialize;

use crate::domain::{self, BundledSuffixList, SuffixList};
use crate::error_handling::UrlError;

pub use normalize::normalize;

/// Validator backed by the bundled Public Suffix List, shared by [`parse_url`].
static DEFAULT_VALIDATOR: LazyLock<UrlValidator> = LazyLock::new(UrlValidator::bundled);

/// Allowed URL schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated http(s) URL and its components.
///
/// Instances only come out of a successful validation and never change
/// afterwards. Components are kept as they appeared in the input; only the
/// domain and suffix are lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedUrl {
    protocol: Protocol,
    host: String,
    port: Option<u16>,
    path: String,
    query: Option<String>,
    anchor: Option<String>,
    user_info: Option<String>,
    domain: Option<String>,
    suffix: Option<String>,
    canonical_url: String,
}

impl ParsedUrl {
    /// The canonical URL: `protocol://host[:port][path][?query][#anchor]`.
    pub fn canonical_url(&self) -> &str {
        &self.canonical_url
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// The authority host as given: an IPv4 literal, `localhost` or a DNS name.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The port, `None` when the URL does not specify one.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// The raw path; empty when the URL has none.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The raw query, without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// The raw fragment, without the leading `#`.
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    /// The raw `user[:password]` part of the authority.
    pub fn user_info(&self) -> Option<&str> {
        self.user_info.as_deref()
    }

    /// The registrable domain: `"localhost"` for localhost, `None` for IPv4 literals.
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// The registry suffix of a named host; `None` for localhost and IPv4 literals.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_url)
    }
}

impl FromStr for ParsedUrl {
    type Err = UrlError;

    /// Validates `s` against the bundled Public Suffix List.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_url(s)
    }
}

/// Validates URL candidates against a Public Suffix List.
///
/// Cloning is cheap; clones share the same read-only list.
#[derive(Clone)]
pub struct UrlValidator {
    suffixes: Arc<dyn SuffixList>,
}

impl UrlValidator {
    pub fn new(suffixes: Arc<dyn SuffixList>) -> Self {
        Self { suffixes }
    }

    /// A validator using the Public Suffix List compiled into the crate.
    pub fn bundled() -> Self {
        Self::new(Arc::new(BundledSuffixList))
    }

    /// Validates and decomposes a URL candidate.
    ///
    /// Bare domains are accepted and default to `http`. Nothing is returned
    /// unless every stage succeeds.
    ///
    /// # Errors
    ///
    /// Returns the first [`UrlError`] encountered. `UrlError::InvalidInput` is
    /// returned for an absent candidate.
    pub fn parse<'a>(&self, candidate: impl Into<Option<&'a str>>) -> Result<ParsedUrl, UrlError> {
        let input = candidate.into().ok_or(UrlError::InvalidInput)?;
        let result = self.parse_candidate(input);
        if let Err(e) = &result {
            debug!("Rejected URL candidate {input:?}: {e}");
        }
        result
    }

    fn parse_candidate(&self, input: &str) -> Result<ParsedUrl, UrlError> {
        let normalized = normalize(input);

        let fields = structure::split(&normalized, input)?;
        strict::check(&normalized, &fields, input)?;
        let protocol = structure::check_protocol(fields.scheme, input)?;
        let port = structure::check_port(fields.port, input)?;

        let resolution = domain::resolve(self.suffixes.as_ref(), fields.host, input)?;

        let canonical_url = canonical::reconstruct(
            protocol,
            fields.host,
            port,
            fields.path,
            fields.query,
            fields.fragment,
        );

        Ok(ParsedUrl {
            protocol,
            host: fields.host.to_string(),
            port,
            path: fields.path.to_string(),
            query: fields.query.map(str::to_string),
            anchor: fields.fragment.map(str::to_string),
            user_info: fields.user_info.map(str::to_string),
            domain: resolution.domain,
            suffix: resolution.suffix,
            canonical_url,
        })
    }
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::bundled()
    }
}

impl fmt::Debug for UrlValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlValidator").finish_non_exhaustive()
    }
}

/// Validates a URL candidate against the bundled Public Suffix List.
///
/// See [`UrlValidator::parse`].
pub fn parse_url<'a>(candidate: impl Into<Option<&'a str>>) -> Result<ParsedUrl, UrlError> {
    DEFAULT_VALIDATOR.parse(candidate)
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
