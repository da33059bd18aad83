//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is loaded first if present.

use crate::birthdays::DEFAULT_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Largest accepted birthday reminder window, in days.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Configuration for the contact book assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// How many days ahead `birthdays` looks (default: 7)
    pub birthday_window_days: u32,

    /// Prompt printed before each command (default: "Enter a command: ")
    pub prompt: String,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: Reminder window in days, 0-366 (default: 7)
    /// - `ASSISTANT_PROMPT`: Input prompt (default: "Enter a command: ")
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days)?;
        if birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or(defaults.prompt);
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            birthday_window_days,
            prompt,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            prompt: "Enter a command: ".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.birthday_window_days, 7);
        assert_eq!(config.prompt, "Enter a command: ");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "14");
        guard.set("ASSISTANT_PROMPT", "> ");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.birthday_window_days, 14);
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_window_too_large() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "400");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "BIRTHDAY_WINDOW_DAYS");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u32() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_WINDOW_U32", "42");

        assert_eq!(Config::parse_env_u32("TEST_WINDOW_U32", 7).unwrap(), 42);
        assert_eq!(Config::parse_env_u32("NONEXISTENT_WINDOW", 7).unwrap(), 7);
    }

    #[test]
    #[serial]
    fn test_parse_env_u32_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_WINDOW_INVALID", "a week");

        assert!(Config::parse_env_u32("TEST_WINDOW_INVALID", 7).is_err());
    }
}
