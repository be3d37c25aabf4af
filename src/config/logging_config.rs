use ::config::{Config, ConfigError};

use super::{load_env_source, optional};

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set
    pub level: String,
    /// Rolling log file; a date suffix is appended per day
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: "logs/app.log".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&load_env_source()?)
    }

    pub fn from_source(cfg: &Config) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            level: optional(cfg.get_string("log_level"))?.unwrap_or(defaults.level),
            file: optional(cfg.get_string("log_file"))?.unwrap_or(defaults.file),
        })
    }
}
