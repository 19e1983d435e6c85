//! Country Explorer - browse, filter and group the world's countries
//!
//! Runs the terminal UI by default. The `list` and `config` subcommands
//! work headlessly for scripting.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

use country_explorer::cli::{CliError, ConfigArgs, ExitCode, ListArgs};
use country_explorer::config::Config;
use country_explorer::constants::APP_NAME;
use country_explorer::fetch::CountrySource;
use country_explorer::{logging, tui};

/// Country Explorer - browse, filter and group the world's countries
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Read countries from a JSON file instead of the GraphQL endpoint
    #[arg(long, value_name = "FILE", global = true)]
    data: Option<PathBuf>,

    /// GraphQL endpoint URL (overrides the config file)
    #[arg(long, value_name = "URL", global = true)]
    endpoint: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter, group and print countries
    List(ListArgs),
    /// Show or initialize the configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose).ok();
    info!(version = env!("CARGO_PKG_VERSION"), "{APP_NAME} starting");

    match cli.command {
        None => {
            let config = Config::load()?;
            let source = CountrySource::resolve(&config, cli.data, cli.endpoint);
            tui::run(&config, source)
        }
        Some(command) => {
            let result = match command {
                Command::List(args) => load_config().and_then(|config| {
                    let source = CountrySource::resolve(&config, cli.data, cli.endpoint);
                    args.execute(&source)
                }),
                Command::Config(args) => args.execute(),
            };

            match result {
                Ok(()) => std::process::exit(ExitCode::Success.code()),
                Err(e) => {
                    warn!(error = %e, "Command failed");
                    eprintln!("Error: {e}");
                    std::process::exit(e.exit_code.code());
                }
            }
        }
    }
}

fn load_config() -> Result<Config, CliError> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}
