//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Environment variable holding the tracing filter directive.
pub const LOG_FILTER_VAR: &str = "JOBAPPLY_LOG";
/// Environment variable overriding the log file location.
pub const LOG_FILE_VAR: &str = "JOBAPPLY_LOG_FILE";
/// Environment variable overriding the export directory.
pub const EXPORT_DIR_VAR: &str = "JOBAPPLY_EXPORT_DIR";

const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A default path was needed but the platform has no data directory.
    #[error("could not determine XDG data directory; set JOBAPPLY_LOG_FILE and JOBAPPLY_EXPORT_DIR")]
    NoDataDir,
}

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directive, e.g. `info` or `jobapply=debug`.
    pub log_filter: String,
    /// File that receives log output while the TUI owns the terminal.
    pub log_file: PathBuf,
    /// Directory where exported snapshots are written.
    pub export_dir: PathBuf,
}

impl Config {
    /// Loads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok(), dirs::data_dir())
    }

    /// Resolves settings from a variable lookup and an optional data directory.
    ///
    /// Empty variables are treated as unset.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        data_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let app_dir = data_dir.map(|d| d.join("jobapply"));

        let log_filter = var(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let log_file = match var(LOG_FILE_VAR) {
            Some(path) => PathBuf::from(path),
            None => app_dir
                .as_ref()
                .ok_or(ConfigError::NoDataDir)?
                .join("jobapply.log"),
        };
        let export_dir = match var(EXPORT_DIR_VAR) {
            Some(path) => PathBuf::from(path),
            None => app_dir
                .as_ref()
                .ok_or(ConfigError::NoDataDir)?
                .join("applications"),
        };

        Ok(Self {
            log_filter,
            log_file,
            export_dir,
        })
    }

    /// Applies command-line overrides on top of the loaded settings.
    pub fn with_overrides(mut self, log_file: Option<PathBuf>, export_dir: Option<PathBuf>) -> Self {
        if let Some(path) = log_file {
            self.log_file = path;
        }
        if let Some(dir) = export_dir {
            self.export_dir = dir;
        }
        self
    }
}
