pub mod catalog_handler;
pub mod fallback_handler;
pub mod health_handler;

pub use catalog_handler::{catalog_stats, get_catalog_item, list_catalog};
pub use fallback_handler::route_not_found;
pub use health_handler::health_check;
