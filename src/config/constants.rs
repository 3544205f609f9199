//! Configuration constants.
//!
//! This module defines the constants used as defaults across the crate.

/// Scheme prepended to candidates without a known scheme prefix.
pub const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Maximum URL length (2048 characters) accepted by batch checks.
/// This matches common browser and server limits (e.g., IE, Apache, Nginx default limits).
pub const MAX_URL_LENGTH: usize = 2048;

/// Emit a progress line every this many checked lines in batch mode.
pub const LOGGING_INTERVAL: usize = 10_000;
