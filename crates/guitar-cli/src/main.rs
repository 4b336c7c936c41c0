use anyhow::{Context, Result};
use clap::Parser;
use guitar_core::Registry;
use std::path::Path;

mod commands;
mod config;
mod logging;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "guitar-registry", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level, including every guitar minted and released
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Create a list of guitars, print them, and check the live count
    ///
    /// Builds three guitars (Fender Telecaster, Ibanez RG550, Martin D-28),
    /// prints the summary of each, clears the list, and fails if any guitar
    /// is still counted as alive afterwards.
    Demo,
    /// Create a single guitar and print its summary
    ///
    /// Without --strings and --price the guitar gets the configured defaults
    /// (6 strings and a price of 100.0 unless overridden in the config file).
    /// The string count must be between 4 and 12 and the price must be
    /// greater than 0.
    New {
        /// Manufacturer, e.g. Fender
        brand: String,

        /// Model name, e.g. Stratocaster
        model: String,

        /// Number of strings (4 to 12)
        #[arg(long)]
        strings: Option<u32>,

        /// Price (greater than 0)
        #[arg(long, allow_negative_numbers = true)]
        price: Option<f64>,

        /// Print the guitar as JSON instead of a summary line
        #[arg(long)]
        json: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults if it does not exist
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli, &config::config_file_path())
}

/// Dispatch a parsed command line.
///
/// The config is only loaded by commands that use it, so `config path`,
/// `config example` and `config init` keep working when the config file or
/// a GUITAR_* variable is broken.
fn run(cli: Cli, config_path: &Path) -> Result<()> {
    match cli.command {
        Commands::Demo => {
            let config = load_config(config_path, cli.verbose)?;
            let registry = registry_from(&config)?;
            commands::run_demo(&registry)?;
        }
        Commands::New {
            brand,
            model,
            strings,
            price,
            json,
        } => {
            let config = load_config(config_path, cli.verbose)?;
            let registry = registry_from(&config)?;
            commands::run_new(&registry, brand, model, strings, price, json)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let config = load_config(config_path, cli.verbose)?;
                commands::config::show_config(&config, config_path)?;
            }
            ConfigAction::Path => commands::config::show_path(config_path)?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config(config_path)?,
        },
    }

    Ok(())
}

/// Load the layered config and initialise logging from it.
fn load_config(config_path: &Path, verbose: bool) -> Result<Config> {
    let config = Config::load_from(config_path)?;
    logging::init(&config.logging, verbose)?;
    Ok(config)
}

fn registry_from(config: &Config) -> Result<Registry> {
    Registry::with_defaults(config.default_strings, config.default_price)
        .context("Invalid defaults in configuration")
}
