use anyhow::{anyhow, bail, Result};
use twyg::{LogLevel, OptsBuilder};

use crate::config::LoggingConfig;

/// Initialise the global logger from the `[logging]` config section.
///
/// `verbose` forces debug regardless of the configured level.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let level = if verbose {
        LogLevel::Debug
    } else {
        parse_level(&config.level)?
    };

    let opts = OptsBuilder::new()
        .coloured(config.coloured)
        .level(level)
        .build()
        .map_err(|e| anyhow!("Invalid logging options: {}", e))?;

    twyg::setup(opts).map_err(|e| anyhow!("Failed to initialise logging: {}", e))?;

    Ok(())
}

fn parse_level(level: &str) -> Result<LogLevel> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(LogLevel::Trace),
        "debug" => Ok(LogLevel::Debug),
        "info" => Ok(LogLevel::Info),
        "warn" => Ok(LogLevel::Warn),
        "error" => Ok(LogLevel::Error),
        other => bail!(
            "Unknown log level: {}\n\nValid levels: trace, debug, info, warn, error",
            other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert!(matches!(parse_level("debug"), Ok(LogLevel::Debug)));
        assert!(matches!(parse_level("WARN"), Ok(LogLevel::Warn)));
        assert!(parse_level("loud").is_err());
    }
}
