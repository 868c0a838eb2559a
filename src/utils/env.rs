//! Environment variable management
//!
//! Handles loading and validation of the locator's configuration.

use std::env;

use log::LevelFilter;

use crate::detector::constants::DEFAULT_CONTEXT_LINES;
use crate::error::{LocatorError, Result};

/// Number of lines shown around a finding
pub const CONTEXT_LINES_VAR: &str = "IAC_LOCATOR_CONTEXT_LINES";

/// Maximum level of the log subscriber installed by the binary
pub const LOG_LEVEL_VAR: &str = "IAC_LOCATOR_LOG_LEVEL";

/// Upper bound for the context window
pub const MAX_CONTEXT_LINES: usize = 100;

/// Locator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatorConfig {
    pub context_lines: usize,
    pub log_level: LevelFilter,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            context_lines: DEFAULT_CONTEXT_LINES,
            log_level: LevelFilter::Warn,
        }
    }
}

/// Load environment variables from .env file
///
/// Does not fail if .env file doesn't exist (optional configuration).
pub fn load_env() -> Result<()> {
    dotenv::dotenv().ok();
    Ok(())
}

/// Build the configuration from the environment
///
/// Unset variables fall back to their defaults.
///
/// # Errors
/// Returns error if a variable is set to an unusable value
pub fn load_config() -> Result<LocatorConfig> {
    let mut config = LocatorConfig::default();

    if let Ok(raw) = env::var(CONTEXT_LINES_VAR) {
        config.context_lines = parse_context_lines(&raw)?;
    }
    if let Ok(raw) = env::var(LOG_LEVEL_VAR) {
        config.log_level = parse_log_level(&raw)?;
    }

    Ok(config)
}

/// Validate a context window size
///
/// Must be a whole number between 1 and [`MAX_CONTEXT_LINES`].
pub fn parse_context_lines(raw: &str) -> Result<usize> {
    let value: usize = raw.trim().parse().map_err(|_| {
        LocatorError::InvalidConfig(format!(
            "{} must be a positive integer, got '{}'",
            CONTEXT_LINES_VAR, raw
        ))
    })?;

    if value == 0 || value > MAX_CONTEXT_LINES {
        return Err(LocatorError::InvalidConfig(format!(
            "{} must be between 1 and {}, got {}",
            CONTEXT_LINES_VAR, MAX_CONTEXT_LINES, value
        )));
    }

    Ok(value)
}

/// Parse a log level name (off, error, warn, info, debug, trace)
pub fn parse_log_level(raw: &str) -> Result<LevelFilter> {
    raw.trim().parse::<LevelFilter>().map_err(|_| {
        LocatorError::InvalidConfig(format!("{} has unknown level '{}'", LOG_LEVEL_VAR, raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EnvGuard;

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            env::remove_var(CONTEXT_LINES_VAR);
            env::remove_var(LOG_LEVEL_VAR);
        }
    }

    #[test]
    fn test_parse_context_lines_valid() {
        assert_eq!(parse_context_lines("5").unwrap(), 5);
        assert_eq!(parse_context_lines(" 12 ").unwrap(), 12);
    }

    #[test]
    fn test_parse_context_lines_zero() {
        let result = parse_context_lines("0");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("between 1 and 100"));
    }

    #[test]
    fn test_parse_context_lines_too_large() {
        assert!(parse_context_lines("101").is_err());
        assert!(parse_context_lines("100").is_ok());
    }

    #[test]
    fn test_parse_context_lines_not_a_number() {
        let err = parse_context_lines("three").unwrap_err();
        assert!(matches!(err, LocatorError::InvalidConfig(_)));
        assert!(err.to_string().contains("positive integer"));
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_log_level("WARN").unwrap(), LevelFilter::Warn);
        assert_eq!(parse_log_level("off").unwrap(), LevelFilter::Off);
        assert!(parse_log_level("loud").is_err());
    }

    #[test]
    #[serial_test::serial]
    fn test_load_config_defaults() {
        let _guard = EnvGuard;
        env::remove_var(CONTEXT_LINES_VAR);
        env::remove_var(LOG_LEVEL_VAR);

        assert_eq!(load_config().unwrap(), LocatorConfig::default());
    }

    #[test]
    #[serial_test::serial]
    fn test_load_config_from_env() {
        let _guard = EnvGuard;
        env::set_var(CONTEXT_LINES_VAR, "7");
        env::set_var(LOG_LEVEL_VAR, "info");

        let config = load_config().unwrap();
        assert_eq!(config.context_lines, 7);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    #[serial_test::serial]
    fn test_load_config_rejects_bad_value() {
        let _guard = EnvGuard;
        env::set_var(CONTEXT_LINES_VAR, "-1");

        assert!(load_config().is_err());
    }

    #[test]
    #[serial_test::serial]
    fn test_load_env_doesnt_fail_on_missing_file() {
        // Should not panic or error even if .env doesn't exist
        let result = load_env();
        assert!(result.is_ok());
    }
}
