use std::sync::Arc;

use crate::config::AppConfig;
use crate::controllers::Controller;
use crate::models::Catalog;

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Response helpers used by every handler
    pub controller: Arc<Controller>,
    /// Read-only catalog served by the demo routes
    pub catalog: Arc<Catalog>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(controller: Controller, catalog: Catalog, config: AppConfig) -> Self {
        Self {
            controller: Arc::new(controller),
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
