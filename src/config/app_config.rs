use ::config::{Config, ConfigError};
use serde::Deserialize;

use super::{load_env_source, optional};

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub app_name: String,
    pub app_version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "development".to_string(),
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&load_env_source()?)
    }

    pub fn from_source(cfg: &Config) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match optional(cfg.get_int("port"))? {
            Some(port) => u16::try_from(port)
                .map_err(|_| ConfigError::Message(format!("port {port} is out of range")))?,
            None => defaults.port,
        };

        Ok(Self {
            host: optional(cfg.get_string("host"))?.unwrap_or(defaults.host),
            port,
            environment: optional(cfg.get_string("environment"))?.unwrap_or(defaults.environment),
            app_name: optional(cfg.get_string("app_name"))?.unwrap_or(defaults.app_name),
            app_version: optional(cfg.get_string("app_version"))?.unwrap_or(defaults.app_version),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
