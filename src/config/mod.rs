//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default scheme, length limits, etc.)
//! - Configuration types shared by the library and the CLI

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, FailOn, LogFormat, LogLevel, OutputFormat};
