//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `url_validator` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit status policy
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use url_validator::initialization::init_logger_with;
use url_validator::{run_check, Config, FailOn, LogFormat, LogLevel, OutputFormat};

/// Validate http(s) URLs and resolve their registrable domain.
///
/// Reads one URL candidate per line; blank lines and lines starting with `#` are skipped.
#[derive(Debug, Parser)]
#[command(name = "url_validator", version, about)]
struct Cli {
    /// File to read URL candidates from (stdin when omitted)
    file: Option<PathBuf>,

    /// Public Suffix List file to use instead of the bundled list
    #[arg(long)]
    suffix_list: Option<PathBuf>,

    /// Result output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    output: OutputFormat,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    /// Exit with status 2 when candidates were rejected
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    fail_on: FailOn,

    /// Reject lines longer than this many bytes without parsing them
    #[arg(long, default_value_t = url_validator::config::MAX_URL_LENGTH)]
    max_url_length: usize,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            input: cli.file,
            suffix_list: cli.suffix_list,
            output: cli.output,
            log_level: cli.log_level,
            log_format: cli.log_format,
            fail_on: cli.fail_on,
            max_url_length: cli.max_url_length,
        }
    }
}

fn main() -> Result<()> {
    let config = Config::from(Cli::parse());

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_check(&config) {
        Ok(report) => {
            eprintln!(
                "Checked {} URL{} ({} valid, {} invalid) in {:.1}s",
                report.total,
                if report.total == 1 { "" } else { "s" },
                report.valid,
                report.invalid,
                report.elapsed_seconds
            );
            if config.fail_on == FailOn::AnyInvalid && report.invalid > 0 {
                process::exit(2);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("url_validator error: {:#}", e);
            process::exit(1);
        }
    }
}
