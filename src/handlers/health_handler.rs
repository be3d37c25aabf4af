use axum::extract::State;
use serde_json::json;

use crate::config::AppState;
use crate::interceptors::ResponseSlot;

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> ResponseSlot {
    let mut slot = ResponseSlot::new();

    let data = json!({
        "status": "ok",
        "app": state.config.app_name,
        "version": state.config.app_version,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    state
        .controller
        .emit_success(&mut slot, Some(data), Some("Service is healthy"));
    slot
}
