//! Tracing subscriber setup.
//!
//! The TUI owns stdout, so interactive sessions log to a file; the headless
//! `check` command logs to stderr.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Errors raised while installing the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{value}'")]
    Filter {
        value: String,
        #[source]
        source: ParseError,
    },

    #[error("could not open log file {}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Parses a filter directive such as `info` or `jobapply=debug`.
pub fn build_filter(directive: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directive).map_err(|source| TelemetryError::Filter {
        value: directive.to_string(),
        source,
    })
}

/// Installs a subscriber that appends to `path`, creating parent directories.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init_file(directive: &str, path: &Path) -> Result<(), TelemetryError> {
    let filter = build_filter(directive)?;
    let file = open_log_file(path).map_err(|source| TelemetryError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_target(false)
        .with_ansi(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

/// Installs a subscriber that writes to stderr.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init_stderr(directive: &str) -> Result<(), TelemetryError> {
    let filter = build_filter(directive)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
