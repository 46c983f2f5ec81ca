//! Diagnostics through `tracing`, written to a file.
//!
//! A full-screen terminal UI owns stdout and stderr, so log output has to go
//! somewhere else. [`init_logging`] installs a global `tracing-subscriber`
//! fmt subscriber that appends plain (non-ANSI) lines to a file.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from
//! [`LogConfig::filter`] (default `info`). Widget transitions are logged at
//! `debug`, focus moves at `trace`:
//!
//! ```text
//! RUST_LOG=flyout_widgets=debug cargo run --example site_nav -- --log nav.log
//! ```

use crate::runtime::ProgramError;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where and how much to log.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// File the log lines are appended to. Created if missing.
    pub file: PathBuf,
    /// Fallback filter directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl LogConfig {
    /// Log to `file` at `info` unless `RUST_LOG` says otherwise.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            filter: "info".to_string(),
        }
    }

    /// Replace the fallback filter directive.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.filter))
    }
}

/// Install the global subscriber described by `config`.
///
/// Fails if the file cannot be opened or a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<(), ProgramError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)?;

    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| ProgramError::Logging(err.to_string()))?;

    tracing::info!(file = %config.file.display(), "logging initialized");
    Ok(())
}
