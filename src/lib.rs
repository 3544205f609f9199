//! url_validator library: http(s) URL validation and registrable domain resolution
//!
//! This library validates and normalizes user-supplied URL candidates into
//! well-formed http(s) URLs and decomposes them into protocol, host, port, path,
//! query, fragment, user-info, registrable domain and registry suffix. It performs
//! no I/O during validation: the host is resolved against a Public Suffix List,
//! never against DNS.
//!
//! # Example
//!
//! ```
//! use url_validator::{parse_url, ErrorKind};
//!
//! let url = parse_url("google.com")?;
//! assert_eq!(url.canonical_url(), "http://google.com");
//! assert_eq!(url.domain(), Some("google.com"));
//! assert_eq!(url.suffix(), Some("com"));
//!
//! let err = parse_url("ftp://google.com").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::DisallowedProtocol);
//! assert_eq!(
//!     err.to_string(),
//!     "Protocol is not http or https, provided URL: ftp://google.com"
//! );
//! # Ok::<(), url_validator::UrlError>(())
//! ```
//!
//! Use [`UrlValidator::new`] with a [`LoadedSuffixList`] to validate against a
//! fresher or custom list than the one compiled into the crate.

pub mod config;
pub mod domain;
mod error_handling;
pub mod initialization;
mod run;
mod url;
pub mod utils;

// Re-export public API
pub use config::{Config, FailOn, LogFormat, LogLevel, OutputFormat};
pub use domain::{BundledSuffixList, LoadedSuffixList, SuffixList};
pub use error_handling::{ArgumentError, ErrorKind, InitializationError, UrlError};
pub use run::{check_lines, run_check, CheckReport};
pub use crate::url::{normalize, parse_url, ParsedUrl, Protocol, UrlValidator};
