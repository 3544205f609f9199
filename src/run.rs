//! Batch checking of URL candidates.
//!
//! Reads one candidate per line, skipping blank lines and `#` comments, and
//! writes one result line per candidate.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::config::{Config, OutputFormat, LOGGING_INTERVAL};
use crate::error_handling::{ErrorKind, UrlError};
use crate::initialization::init_validator;
use crate::url::{ParsedUrl, UrlValidator};

/// Results of a batch check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    /// Candidates checked (blank lines and comments excluded)
    pub total: usize,
    /// Candidates that validated
    pub valid: usize,
    /// Candidates that were rejected
    pub invalid: usize,
    /// Rejections per error kind; every kind is present, possibly with 0
    pub by_kind: HashMap<ErrorKind, usize>,
    /// Wall-clock duration of the run
    pub elapsed_seconds: f64,
}

impl CheckReport {
    fn new() -> Self {
        Self {
            total: 0,
            valid: 0,
            invalid: 0,
            by_kind: ErrorKind::iter().map(|kind| (kind, 0)).collect(),
            elapsed_seconds: 0.0,
        }
    }

    fn record(&mut self, outcome: &Result<ParsedUrl, UrlError>) {
        self.total += 1;
        match outcome {
            Ok(_) => self.valid += 1,
            Err(e) => {
                self.invalid += 1;
                *self.by_kind.entry(e.kind()).or_insert(0) += 1;
            }
        }
    }
}

#[derive(Serialize)]
struct ResultLine<'a> {
    input: &'a str,
    #[serde(flatten)]
    outcome: Outcome<'a>,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum Outcome<'a> {
    Valid { url: &'a ParsedUrl },
    Invalid { kind: ErrorKind, message: String },
}

/// Runs a batch check as configured: reads `config.input` (or stdin) and
/// writes results to stdout.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the suffix list or the
/// input cannot be read, or stdout cannot be written.
pub fn run_check(config: &Config) -> Result<CheckReport> {
    config.validate()?;
    let validator = init_validator(config).context("Failed to initialize URL validator")?;

    let reader: Box<dyn BufRead> = match &config.input {
        Some(path) => Box::new(BufReader::new(File::open(path).with_context(|| {
            format!("Failed to open input file {}", path.display())
        })?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let stdout = io::stdout();
    check_lines(&validator, config, reader, stdout.lock())
}

/// Checks every candidate line from `reader`, writing one result line to `writer`.
///
/// In plain mode a valid line yields its canonical URL and an invalid line
/// yields `# ` followed by the error message, so the output can be fed back as
/// input. In JSON mode each line is an object with the input, a `status` and
/// either the parsed `url` or the error `kind` and `message`.
///
/// # Errors
///
/// Returns an error if reading or writing fails. Invalid candidates are not
/// errors; they are counted in the report.
pub fn check_lines<R, W>(
    validator: &UrlValidator,
    config: &Config,
    reader: R,
    mut writer: W,
) -> Result<CheckReport>
where
    R: BufRead,
    W: Write,
{
    let start = Instant::now();
    let mut report = CheckReport::new();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read input line {}", line_number + 1))?;
        let candidate = line.trim();
        if candidate.is_empty() || candidate.starts_with('#') {
            continue;
        }

        let outcome = if candidate.len() > config.max_url_length {
            Err(UrlError::UrlSyntaxError {
                message: format!(
                    "URL exceeds maximum length ({} > {})",
                    candidate.len(),
                    config.max_url_length
                ),
                input: candidate.to_string(),
            })
        } else {
            validator.parse(candidate)
        };

        if let Err(e) = &outcome {
            warn!("Line {}: {e}", line_number + 1);
        }
        write_result(&mut writer, config.output, candidate, &outcome)?;
        report.record(&outcome);

        if report.total % LOGGING_INTERVAL == 0 {
            info!(
                "Checked {} URLs ({} valid, {} invalid)",
                report.total, report.valid, report.invalid
            );
        }
    }

    writer.flush().context("Failed to flush output")?;
    report.elapsed_seconds = start.elapsed().as_secs_f64();
    info!(
        "Checked {} URLs in {:.2}s: {} valid, {} invalid",
        report.total, report.elapsed_seconds, report.valid, report.invalid
    );
    Ok(report)
}

fn write_result<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    input: &str,
    outcome: &Result<ParsedUrl, UrlError>,
) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            let written = match outcome {
                Ok(url) => writeln!(writer, "{url}"),
                Err(e) => writeln!(writer, "# {e}"),
            };
            written.context("Failed to write result")?;
        }
        OutputFormat::Json => {
            let line = ResultLine {
                input,
                outcome: match outcome {
                    Ok(url) => Outcome::Valid { url },
                    Err(e) => Outcome::Invalid {
                        kind: e.kind(),
                        message: e.to_string(),
                    },
                },
            };
            serde_json::to_writer(&mut *writer, &line).context("Failed to serialize result")?;
            writeln!(writer).context("Failed to write result")?;
        }
    }
    Ok(())
}
