use axum::{routing::get, Router};

use crate::config::AppState;
use crate::handlers::{catalog_stats, get_catalog_item, health_check, list_catalog, route_not_found};

/// Create API router
pub fn create_router(state: AppState) -> Router {
    // Health check route (outside /api)
    let health_routes = Router::new().route("/health", get(health_check));

    let catalog_routes = Router::new()
        .route("/catalog", get(list_catalog))
        .route("/catalog/:id", get(get_catalog_item));

    let admin_routes = Router::new().route("/admin/catalog/stats", get(catalog_stats));

    Router::new()
        .merge(health_routes)
        .nest("/api", Router::new().merge(catalog_routes).merge(admin_routes))
        .fallback(route_not_found)
        .with_state(state)
}
