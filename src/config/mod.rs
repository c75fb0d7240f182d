//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MEMBERPRESS_EVENTS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use memberpress_events::config::{init_tracing, AppConfig};
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! init_tracing(&config.logging).expect("Failed to install subscriber");
//! ```

mod error;
mod logging;

pub use error::{ConfigError, ValidationError};
pub use logging::{init_tracing, LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Environment name
    #[serde(default)]
    pub environment: Environment,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Application environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MEMBERPRESS_EVENTS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MEMBERPRESS_EVENTS__LOGGING__LEVEL=debug` -> `logging.level = debug`
    /// - `MEMBERPRESS_EVENTS__ENVIRONMENT=production` -> `environment = production`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MEMBERPRESS_EVENTS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialise tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("MEMBERPRESS_EVENTS__LOGGING__LEVEL");
        env::remove_var("MEMBERPRESS_EVENTS__LOGGING__FORMAT");
        env::remove_var("MEMBERPRESS_EVENTS__ENVIRONMENT");
    }

    #[test]
    fn test_load_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MEMBERPRESS_EVENTS__LOGGING__LEVEL", "debug");
        env::set_var("MEMBERPRESS_EVENTS__LOGGING__FORMAT", "json");
        env::set_var("MEMBERPRESS_EVENTS__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn test_invalid_format_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MEMBERPRESS_EVENTS__LOGGING__FORMAT", "xml");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_rejects_empty_level() {
        let config = AppConfig {
            logging: LoggingConfig {
                level: String::new(),
                format: LogFormat::Pretty,
            },
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
