//! Logging configuration and subscriber setup

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::{ConfigError, ValidationError};

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `memberpress_events=debug`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

/// Log line format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level.trim().is_empty() {
            return Err(ValidationError::MissingRequired("logging.level"));
        }
        EnvFilter::try_new(&self.level)
            .map_err(|e| ValidationError::InvalidLogFilter(e.to_string()))?;
        Ok(())
    }

    /// Builds the filter, preferring `RUST_LOG` over the configured level.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.level).map_err(|e| {
                ConfigError::ValidationFailed(ValidationError::InvalidLogFilter(e.to_string()))
            }),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Fails if the filter is malformed or a subscriber is already installed.
pub fn init_tracing(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = logging.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match logging.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| ConfigError::TracingInit(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info_pretty() {
        let logging = LoggingConfig::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, LogFormat::Pretty);
        assert!(logging.validate().is_ok());
    }

    #[test]
    fn empty_level_is_rejected() {
        let logging = LoggingConfig {
            level: "  ".to_string(),
            format: LogFormat::Json,
        };
        assert_eq!(
            logging.validate(),
            Err(ValidationError::MissingRequired("logging.level"))
        );
    }

    #[test]
    fn module_directives_are_accepted() {
        let logging = LoggingConfig {
            level: "warn,memberpress_events=debug".to_string(),
            format: LogFormat::Pretty,
        };
        assert!(logging.validate().is_ok());
    }

    #[test]
    fn malformed_directive_is_rejected() {
        let logging = LoggingConfig {
            level: "memberpress_events=loud".to_string(),
            format: LogFormat::Pretty,
        };
        assert!(matches!(
            logging.validate(),
            Err(ValidationError::InvalidLogFilter(_))
        ));
    }
}
