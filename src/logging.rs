//! Tracing setup.
//!
//! The TUI owns the terminal, so events go to a log file under the config
//! directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Path of the log file.
pub fn log_file_path() -> Result<PathBuf> {
    Ok(Config::config_dir()?.join("logs").join("country-explorer.log"))
}

/// Default filter directive for the crate.
#[must_use]
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "country_explorer=debug"
    } else {
        "country_explorer=info"
    }
}

/// Installs the global subscriber writing to the log file.
///
/// `RUST_LOG` overrides the default directive. Returns the log path.
pub fn init_logging(verbose: bool) -> Result<PathBuf> {
    let log_path = log_file_path()?;
    if let Some(dir) = log_path.parent() {
        fs::create_dir_all(dir)
            .context(format!("Failed to create log directory: {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .context(format!("Failed to open log file: {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(verbose).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "country_explorer=info");
        assert_eq!(default_directive(true), "country_explorer=debug");
    }

    #[test]
    fn test_log_path_under_config_dir() {
        if let (Ok(log), Ok(dir)) = (log_file_path(), Config::config_dir()) {
            assert!(log.starts_with(dir));
        }
    }
}
