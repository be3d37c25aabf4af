use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Compact console output plus a JSON file rotated daily.
/// `RUST_LOG` takes precedence over the configured level.
pub fn setup_logging(config: &LoggingConfig) {
    let log_path = Path::new(&config.file);
    let directory = log_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let file_name = log_path
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("app.log"));

    std::fs::create_dir_all(directory).ok();

    let file_appender = RollingFileAppender::new(Rotation::DAILY, directory, file_name);

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact();

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_target(true)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)))
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!(level = %config.level, file = %config.file, "Logging initialized");
}
