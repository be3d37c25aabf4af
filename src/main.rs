use api_responder::config::{AppConfig, AppState, LoggingConfig, ResponseConfig};
use api_responder::controllers::Controller;
use api_responder::middleware::setup_logging;
use api_responder::models::Catalog;
use api_responder::routes::create_router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    let logging_config = LoggingConfig::from_env()?;
    setup_logging(&logging_config);

    tracing::info!("Starting application...");

    // Load configurations
    let app_config = AppConfig::from_env()?;
    let response_config = ResponseConfig::from_env(app_config.is_production())?;

    tracing::info!(
        environment = %app_config.environment,
        locale = ?response_config.locale,
        expose_error_details = response_config.expose_error_details,
        "Loaded configuration"
    );

    let controller = Controller::from_config(&response_config);
    let app_state = AppState::new(controller, Catalog::seeded(), app_config.clone());

    // Create router
    let app = create_router(app_state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let addr = app_config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        "{} v{} is running on {}",
        app_config.app_name,
        app_config.app_version,
        addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}
