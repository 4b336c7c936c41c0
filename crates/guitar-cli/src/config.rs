use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use guitar_core::model::{DEFAULT_PRICE, DEFAULT_STRINGS};

/// Configuration for guitar-registry.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (GUITAR_* prefix)
/// 3. Config file (~/.config/guitar-registry/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// String count for guitars created from brand and model only.
    ///
    /// Can be set via:
    /// - ENV: GUITAR_DEFAULT_STRINGS
    /// - Config: default_strings = 7
    /// - Default: 6
    #[serde(default = "default_strings", deserialize_with = "value_or_string")]
    pub default_strings: u32,

    /// Price for guitars created from brand and model only.
    ///
    /// Can be set via:
    /// - ENV: GUITAR_DEFAULT_PRICE
    /// - Config: default_price = 250.0
    /// - Default: 100.0
    #[serde(default = "default_price", deserialize_with = "value_or_string")]
    pub default_price: f64,

    #[serde(default)]
    pub logging: LoggingConfig,

    // The env layer flattens GUITAR_LOGGING_LEVEL to a top-level
    // `logging_level` key; these are folded into `logging` after loading.
    #[serde(default, skip_serializing, deserialize_with = "optional_value_or_string")]
    logging_level: Option<String>,

    #[serde(default, skip_serializing, deserialize_with = "optional_value_or_string")]
    logging_coloured: Option<bool>,
}

/// The `[logging]` section.
///
/// Can also be set via GUITAR_LOGGING_LEVEL and GUITAR_LOGGING_COLOURED.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error.
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default = "default_coloured", deserialize_with = "value_or_string")]
    pub coloured: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_strings: default_strings(),
            default_price: default_price(),
            logging: LoggingConfig::default(),
            logging_level: None,
            logging_coloured: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            coloured: default_coloured(),
        }
    }
}

impl Config {
    /// Load configuration from `config_path` (if it exists) and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or
    /// if a GUITAR_* variable holds a value of the wrong type.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("guitar");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let mut config: Self = builder.build().context("Failed to build configuration")?;
        config.fold_logging_overrides();

        Ok(config)
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to render configuration")
    }

    fn fold_logging_overrides(&mut self) {
        if let Some(level) = self.logging_level.take() {
            self.logging.level = level;
        }
        if let Some(coloured) = self.logging_coloured.take() {
            self.logging.coloured = coloured;
        }
    }
}

/// Accept either a native value or its string form.
///
/// Values from the environment layer always arrive as strings.
fn value_or_string<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ValueOrString<T> {
        Value(T),
        String(String),
    }

    match ValueOrString::<T>::deserialize(deserializer)? {
        ValueOrString::Value(value) => Ok(value),
        ValueOrString::String(s) => s.trim().parse().map_err(de::Error::custom),
    }
}

fn optional_value_or_string<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    value_or_string(deserializer).map(Some)
}

const fn default_strings() -> u32 {
    DEFAULT_STRINGS
}

const fn default_price() -> f64 {
    DEFAULT_PRICE
}

fn default_level() -> String {
    String::from("info")
}

const fn default_coloured() -> bool {
    true
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/guitar-registry/config.toml
/// - macOS: ~/Library/Application Support/guitar-registry/config.toml
/// - Windows: %APPDATA%\guitar-registry\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("guitar-registry")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Guitar Registry Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (GUITAR_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# String count for guitars created without --strings (4 to 12)
#
# Can also be set via:
# - Environment: GUITAR_DEFAULT_STRINGS=7
default_strings = 6

# Price for guitars created without --price (must be greater than 0)
#
# Can also be set via:
# - Environment: GUITAR_DEFAULT_PRICE=250.0
default_price = 100.0

[logging]
# One of: trace, debug, info, warn, error
# The --verbose flag forces debug.
#
# Can also be set via:
# - Environment: GUITAR_LOGGING_LEVEL=debug
level = "info"

# Can also be set via:
# - Environment: GUITAR_LOGGING_COLOURED=false
coloured = true
"#
}

/// Create the config file at `config_path` if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file_at(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
