pub mod config;
pub mod controllers;
pub mod dto;
pub mod handlers;
pub mod interceptors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod utils;

pub use controllers::Controller;
pub use interceptors::{AppError, EnvelopeFormatter, ResponseFormatter, ResponseSink, ResponseSlot};
