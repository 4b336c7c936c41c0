use anyhow::Result;
use std::path::Path;

use crate::config::{self, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config, config_path: &Path) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config_path.display());
    println!(
        "File exists: {}\n",
        if config_path.exists() { "yes" } else { "no (using defaults)" }
    );

    print!("{}", config.to_toml()?);

    println!("\nPriority: CLI args > ENV vars (GUITAR_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
pub fn show_path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config(config_path: &Path) -> Result<()> {
    let created = config::ensure_config_file_at(config_path)?;

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure guitar-registry.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
