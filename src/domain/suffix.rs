//! Public Suffix List backends.
//!
//! The resolver only needs two capabilities from a suffix list, captured by the
//! [`SuffixList`] trait. Two implementations are provided:
//! - [`BundledSuffixList`]: the list compiled into the `psl` crate
//! - [`LoadedSuffixList`]: a list parsed at startup with the `publicsuffix` crate,
//!   for fresher lists or deterministic fixtures

use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::error_handling::InitializationError;

/// Read-only lookup over a Public Suffix List.
///
/// Implementations receive lower-case ASCII host names without a trailing dot.
pub trait SuffixList: Send + Sync {
    /// The longest *registry* suffix of `host`.
    ///
    /// Registry suffixes are the ICANN section of the list. Private entries
    /// (`blogspot.com`, `github.io`, ...) never count, so `foo.blogspot.com`
    /// yields `com`.
    fn longest_matching_suffix(&self, host: &str) -> Option<String>;

    /// Whether any explicit rule of the list (ICANN or private) matches `host`.
    fn has_any_match(&self, host: &str) -> bool {
        self.longest_matching_suffix(host).is_some()
    }
}

/// Result of a single lookup: matched suffix length in bytes, and whether the
/// matching rule comes from the private section.
type RuleMatch = (usize, bool);

/// Walks `host` from the full name towards its last label until `lookup`
/// reports a registry (non-private) match.
///
/// Each step asks the list for the longest rule matching the candidate, so
/// wildcard and exception rules are honored by the backend.
fn longest_registry_suffix<F>(host: &str, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<RuleMatch>,
{
    let mut candidate = host;
    loop {
        if let Some((len, private)) = lookup(candidate) {
            if !private && len <= candidate.len() {
                return Some(candidate[candidate.len() - len..].to_string());
            }
        }
        match candidate.split_once('.') {
            Some((_, rest)) if !rest.is_empty() => candidate = rest,
            _ => return None,
        }
    }
}

/// The Public Suffix List snapshot compiled into the `psl` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSuffixList;

impl BundledSuffixList {
    fn lookup(name: &str) -> Option<RuleMatch> {
        use psl::Psl;

        let suffix = psl::List.suffix(name.as_bytes())?;
        if !suffix.is_known() {
            return None;
        }
        Some((
            suffix.as_bytes().len(),
            suffix.typ() == Some(psl::Type::Private),
        ))
    }
}

impl SuffixList for BundledSuffixList {
    fn longest_matching_suffix(&self, host: &str) -> Option<String> {
        longest_registry_suffix(host, Self::lookup)
    }

    fn has_any_match(&self, host: &str) -> bool {
        Self::lookup(host).is_some()
    }
}

/// A Public Suffix List parsed from its text format.
///
/// Rules outside the `===BEGIN PRIVATE DOMAINS===` section are treated as
/// registry suffixes, so small fixtures without section markers work as expected.
pub struct LoadedSuffixList {
    list: publicsuffix::List,
    rules: usize,
}

impl LoadedSuffixList {
    /// Reads and parses a list file (e.g. a downloaded `public_suffix_list.dat`).
    pub fn from_path(path: &Path) -> Result<Self, InitializationError> {
        let text = std::fs::read_to_string(path)?;
        let list = text.parse::<Self>()?;
        debug!(
            "Loaded {} suffix rules from {}",
            list.rules,
            path.display()
        );
        Ok(list)
    }

    /// Number of rule lines in the source text.
    pub fn rule_count(&self) -> usize {
        self.rules
    }

    fn lookup(&self, name: &str) -> Option<RuleMatch> {
        use publicsuffix::Psl;

        let suffix = self.list.suffix(name.as_bytes())?;
        if !suffix.is_known() {
            return None;
        }
        Some((
            suffix.as_bytes().len(),
            suffix.typ() == Some(publicsuffix::Type::Private),
        ))
    }
}

impl FromStr for LoadedSuffixList {
    type Err = InitializationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let rules = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with("//"))
            .count();
        if rules == 0 {
            return Err(InitializationError::SuffixListParseError(
                "list contains no rules".to_string(),
            ));
        }
        let list = text
            .parse::<publicsuffix::List>()
            .map_err(|e| InitializationError::SuffixListParseError(e.to_string()))?;
        Ok(Self { list, rules })
    }
}

impl std::fmt::Debug for LoadedSuffixList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedSuffixList")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl SuffixList for LoadedSuffixList {
    fn longest_matching_suffix(&self, host: &str) -> Option<String> {
        longest_registry_suffix(host, |name| self.lookup(name))
    }

    fn has_any_match(&self, host: &str) -> bool {
        self.lookup(host).is_some()
    }
}
