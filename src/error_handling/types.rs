//! Error type definitions.
//!
//! This module defines all error types used throughout the crate: the validation
//! failures a URL candidate can produce, initialization failures and argument
//! validation failures raised by builder assertions.

use log::SetLoggerError;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Why a URL candidate was rejected.
///
/// Every message ends with `", provided URL: {input}"` so callers can surface it
/// as-is. The one exception is [`UrlError::IllegalCharacter`], which reports the
/// full normalized URL after the character index instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// No input was provided at all.
    #[error("Provided URL must not be null")]
    InvalidInput,

    /// The URL grammar rejected the string (malformed authority, bad escape, ...).
    #[error("{message}, provided URL: {input}")]
    UrlSyntaxError { message: String, input: String },

    /// A character that is not legal in its URL component.
    #[error("Illegal character in {component} at index {index}: {normalized}")]
    IllegalCharacter {
        component: &'static str,
        index: usize,
        normalized: String,
    },

    /// The port token is not a number.
    #[error("Invalid port number :{token}, provided URL: {input}")]
    InvalidPort { token: String, input: String },

    /// The port is 0, above 65535 or a negative value other than `-1`.
    #[error("{}, provided URL: {input}", describe_port_range(.port))]
    PortOutOfRange { port: i32, input: String },

    /// The scheme is anything but `http` or `https`.
    #[error("Protocol is not http or https, provided URL: {input}")]
    DisallowedProtocol { input: String },

    /// The host has no registry suffix, or is a registry suffix itself.
    #[error("Not under a registry suffix: {host}, provided URL: {input}")]
    NotUnderRegistrySuffix { host: String, input: String },

    /// The host could not be handed to the suffix lookup (not a domain name, IDNA failure).
    #[error("{message}, provided URL: {input}")]
    DomainError { message: String, input: String },
}

fn describe_port_range(port: &i32) -> String {
    if *port < -1 {
        format!("Invalid port number :{port}")
    } else {
        "Port must be between 0 - 65535".to_string()
    }
}

impl UrlError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            UrlError::InvalidInput => ErrorKind::InvalidInput,
            UrlError::UrlSyntaxError { .. } => ErrorKind::UrlSyntaxError,
            UrlError::IllegalCharacter { .. } => ErrorKind::IllegalCharacter,
            UrlError::InvalidPort { .. } => ErrorKind::InvalidPort,
            UrlError::PortOutOfRange { .. } => ErrorKind::PortOutOfRange,
            UrlError::DisallowedProtocol { .. } => ErrorKind::DisallowedProtocol,
            UrlError::NotUnderRegistrySuffix { .. } => ErrorKind::NotUnderRegistrySuffix,
            UrlError::DomainError { .. } => ErrorKind::DomainError,
        }
    }
}

/// Categories of validation failures.
///
/// Used for tallying rejected inputs in batch runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    UrlSyntaxError,
    IllegalCharacter,
    InvalidPort,
    PortOutOfRange,
    DisallowedProtocol,
    NotUnderRegistrySuffix,
    DomainError,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "Invalid input",
            ErrorKind::UrlSyntaxError => "URL syntax error",
            ErrorKind::IllegalCharacter => "Illegal character",
            ErrorKind::InvalidPort => "Invalid port",
            ErrorKind::PortOutOfRange => "Port out of range",
            ErrorKind::DisallowedProtocol => "Disallowed protocol",
            ErrorKind::NotUnderRegistrySuffix => "Not under a registry suffix",
            ErrorKind::DomainError => "Domain error",
        }
    }
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// The suffix list file could not be read.
    #[error("Suffix list read error: {0}")]
    SuffixListReadError(#[from] std::io::Error),

    /// The suffix list text could not be parsed.
    #[error("Suffix list parse error: {0}")]
    SuffixListParseError(String),
}

/// A builder argument failed an assertion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ArgumentError(pub String);
