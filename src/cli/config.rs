//! Configuration management CLI command.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_BINARY_NAME;
use clap::Args;
use serde::Serialize;

/// Show, locate, or initialize the configuration
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the config file path only
    #[arg(long, conflicts_with = "init")]
    path: bool,

    /// Write a default config file if none exists
    #[arg(long)]
    init: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    path: String,
    exists: bool,
    #[serde(flatten)]
    config: &'a Config,
}

impl ConfigArgs {
    /// Execute config command
    pub fn execute(&self) -> CliResult<()> {
        let path = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate configuration: {e:#}")))?;

        if self.path {
            println!("{}", path.display());
            return Ok(());
        }

        if self.init {
            if path.exists() {
                println!("Configuration already exists: {}", path.display());
                return Ok(());
            }
            Config::new()
                .save_to(&path)
                .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;
            println!("Wrote default configuration to {}", path.display());
            return Ok(());
        }

        let config = Config::load_from(&path)
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            let output = ConfigOutput {
                path: path.display().to_string(),
                exists: path.exists(),
                config: &config,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;
            println!("{json}");
        } else {
            output_human_readable(&config, &path.display().to_string(), path.exists());
        }

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, path: &str, exists: bool) {
    println!("Configuration file: {path}");
    if !exists {
        println!("  Not created yet, using defaults. Run `{APP_BINARY_NAME} config --init` to write it.");
    }
    println!();
    println!("Source:");
    println!("  Endpoint: {}", config.source.endpoint);
    println!("  Timeout:  {}s", config.source.timeout_secs);
    println!();
    println!("UI:");
    println!("  Theme: {:?}", config.ui.theme_mode);
}
