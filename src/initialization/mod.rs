//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger
//! - URL validator and its Public Suffix List
//!
//! All initialization functions return proper error types for error handling.

mod logger;

use std::sync::Arc;

use log::info;

use crate::config::Config;
use crate::domain::{BundledSuffixList, LoadedSuffixList, SuffixList};
use crate::error_handling::InitializationError;
use crate::url::UrlValidator;

// Re-export public API
pub use logger::init_logger_with;

/// Initializes the Public Suffix List used for domain resolution.
///
/// Loads the list file named by `config.suffix_list` when set, otherwise uses
/// the list compiled into the crate. The list is loaded once and shared
/// read-only by every validation.
///
/// # Errors
///
/// Returns an error if the list file cannot be read or parsed.
pub fn init_suffix_list(config: &Config) -> Result<Arc<dyn SuffixList>, InitializationError> {
    match &config.suffix_list {
        Some(path) => {
            let list = LoadedSuffixList::from_path(path)?;
            info!(
                "Using suffix list {} ({} rules)",
                path.display(),
                list.rule_count()
            );
            Ok(Arc::new(list))
        }
        None => Ok(Arc::new(BundledSuffixList)),
    }
}

/// Initializes a URL validator for the configured suffix list.
///
/// # Errors
///
/// See [`init_suffix_list`].
pub fn init_validator(config: &Config) -> Result<UrlValidator, InitializationError> {
    init_suffix_list(config).map(UrlValidator::new)
}
