//! Configuration types.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::MAX_URL_LENGTH;
use crate::utils::require::Require;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Format of the per-line results written by a batch check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Canonical URL for valid lines, the error message for invalid ones
    Plain,
    /// One JSON object per line with every component or the error
    Json,
}

/// When the binary should exit with a failure status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit successfully once the input was read
    Never,
    /// Fail if any line was rejected
    AnyInvalid,
}

/// A configuration field holding an unusable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid configuration for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use url_validator::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: Some(PathBuf::from("urls.txt")),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read URL candidates from; stdin when `None`
    pub input: Option<PathBuf>,

    /// Public Suffix List file; the bundled list when `None`
    pub suffix_list: Option<PathBuf>,

    /// Result output format
    pub output: OutputFormat,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Exit status policy
    pub fail_on: FailOn,

    /// Lines longer than this are rejected without parsing
    pub max_url_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            suffix_list: None,
            output: OutputFormat::Plain,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            fail_on: FailOn::Never,
            max_url_length: MAX_URL_LENGTH,
        }
    }
}

impl Config {
    /// Checks field values that the type system does not rule out.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        Require::assert_that(self.max_url_length)
            .satisfies(|n| *n > 0, "must be greater than 0")
            .map_err(|e| ConfigValidationError {
                field: "max_url_length",
                message: e.0,
            })?;

        Require::mandatory(self.suffix_list.as_ref())
            .rejects(
                |path| path.as_os_str().is_empty(),
                "must not be an empty path",
            )
            .map_err(|e| ConfigValidationError {
                field: "suffix_list",
                message: e.0,
            })?;

        Require::mandatory(self.input.as_ref())
            .rejects(|path| path.is_dir(), "must be a file, not a directory")
            .map_err(|e| ConfigValidationError {
                field: "input",
                message: e.0,
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_url_length, 2048);
        assert_eq!(config.output, OutputFormat::Plain);
        assert_eq!(config.fail_on, FailOn::Never);
    }

    #[test]
    fn test_zero_max_url_length_rejected() {
        let config = Config {
            max_url_length: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "max_url_length");
        assert!(err.message.contains("greater than 0"));
    }

    #[test]
    fn test_empty_suffix_list_path_rejected() {
        let config = Config {
            suffix_list: Some(PathBuf::new()),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "suffix_list");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for 'suffix_list': must not be an empty path"
        );
    }

    #[test]
    fn test_directory_input_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            input: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "input");
    }
}
