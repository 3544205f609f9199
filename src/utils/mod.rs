//! Utility helpers shared by configuration and tooling code.
//!
//! This module provides:
//! - Builder argument assertions (`require`)

pub mod require;
