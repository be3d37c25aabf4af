pub mod app_config;
pub mod app_state;
pub mod logging_config;
pub mod response_config;

pub use app_config::AppConfig;
pub use app_state::AppState;
pub use logging_config::LoggingConfig;
pub use response_config::ResponseConfig;

use ::config::{Config, ConfigError, Environment};

/// Load `.env` (if present) and expose the process environment as a config
/// source. Keys are looked up lowercase.
pub fn load_env_source() -> Result<Config, ConfigError> {
    dotenv::dotenv().ok();

    Config::builder()
        .add_source(Environment::default())
        .build()
}

/// Treat a missing key as `None` while still surfacing malformed values.
pub(crate) fn optional<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ConfigError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(err) => Err(err),
    }
}
