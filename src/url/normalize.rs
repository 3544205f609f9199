//! Input normalization.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::config::DEFAULT_SCHEME_PREFIX;

/// Scheme prefixes that are kept as-is, even the disallowed ones, so they can be
/// rejected later with a precise message instead of being coerced to http.
static KNOWN_SCHEME_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    // Line terminators stop the match: \n, \r, NEL, LS and PS
    Regex::new(r"^(jar|file|ftp|http|https)://[^\n\r\x{85}\x{2028}\x{2029}]*$")
        .expect("scheme prefix pattern is valid")
});

/// Trims the candidate and prepends `http://` unless it starts with a known
/// scheme prefix.
///
/// Trimming removes every leading and trailing character up to and including
/// U+0020 (spaces, tabs, line breaks, other control characters). Nothing else is
/// transformed: no case folding, no percent-decoding.
///
/// # Examples
///
/// ```
/// use url_validator::normalize;
///
/// assert_eq!(normalize(" google.com "), "http://google.com");
/// assert_eq!(normalize("https://google.com"), "https://google.com");
/// assert_eq!(normalize("ftp://google.com"), "ftp://google.com");
/// ```
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim_matches(|c: char| c <= ' ');
    if KNOWN_SCHEME_PREFIX.is_match(trimmed) {
        trimmed.to_string()
    } else {
        debug!("No known scheme prefix, defaulting to {DEFAULT_SCHEME_PREFIX}: {trimmed}");
        format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
    }
}
