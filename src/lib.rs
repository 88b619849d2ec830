// Library root for the Idea Validation API

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;

// Re-export commonly used types
pub use db::{DatabaseProbe, SupabaseClient};
pub use error::ApiError;
pub use models::HealthResponse;

use std::sync::Arc;

use axum::{routing::get, Router};

use config::Config;
use handlers::health_check;
use middleware::create_middleware_stack;

/// Create the Axum router with all endpoints and middleware. The datastore
/// probe is injected so tests can swap in a deterministic double.
pub fn create_router(probe: Arc<dyn DatabaseProbe>, config: &Config) -> Router {
    Router::new()
        // Health check endpoint
        .route("/api/health", get(health_check))
        // Add shared state (datastore probe)
        .with_state(probe)
        // Apply middleware stack
        .layer(create_middleware_stack(config))
}
