use axum::http::StatusCode;
use ::config::{Config, ConfigError};

use crate::controllers::Locale;
use crate::interceptors::{OutcomeKind, StatusPolicy};

use super::{load_env_source, optional};

/// How the controller phrases and codes its responses.
#[derive(Debug, Clone, Default)]
pub struct ResponseConfig {
    pub locale: Locale,
    pub expose_error_details: bool,
    pub status_policy: StatusPolicy,
}

impl ResponseConfig {
    pub fn from_env(is_production: bool) -> Result<Self, ConfigError> {
        Self::from_source(&load_env_source()?, is_production)
    }

    /// Reads `RESPONSE_LOCALE`, `RESPONSE_EXPOSE_ERROR_DETAILS` and one
    /// `RESPONSE_STATUS_<KIND>` override per outcome kind. Error details are
    /// exposed by default outside production.
    pub fn from_source(cfg: &Config, is_production: bool) -> Result<Self, ConfigError> {
        let locale = match optional(cfg.get_string("response_locale"))? {
            Some(tag) => tag
                .parse::<Locale>()
                .map_err(|e| ConfigError::Message(e.to_string()))?,
            None => Locale::default(),
        };

        let expose_error_details =
            optional(cfg.get_bool("response_expose_error_details"))?.unwrap_or(!is_production);

        let mut status_policy = StatusPolicy::default();
        for kind in OutcomeKind::ALL {
            let key = format!("response_status_{}", kind.as_str().to_lowercase());
            if let Some(code) = optional(cfg.get_int(&key))? {
                status_policy = status_policy.with(kind, parse_status(&key, code)?);
            }
        }

        Ok(Self {
            locale,
            expose_error_details,
            status_policy,
        })
    }
}

fn parse_status(key: &str, code: i64) -> Result<StatusCode, ConfigError> {
    u16::try_from(code)
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .ok_or_else(|| ConfigError::Message(format!("{key}: {code} is not a valid HTTP status code")))
}
