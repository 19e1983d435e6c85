//! CLI command handlers.
//!
//! Headless, scriptable access to the country pipeline and configuration.

pub mod common;
pub mod config;
pub mod list;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use list::ListArgs;
