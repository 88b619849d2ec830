// Health check handler
// Answers whether the service and its Supabase datastore are operational

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::error;

use crate::{db::DatabaseProbe, error::ApiError, models::HealthResponse};

/// Check service health, including datastore reachability.
/// GET /api/health
///
/// A positive probe result yields 200 with a fresh [`HealthResponse`]; a
/// negative result or a probe fault yields 503 with a `detail` body. No
/// retries, and no timeout beyond what the probe itself applies.
pub async fn health_check(
    State(probe): State<Arc<dyn DatabaseProbe>>,
) -> Result<impl IntoResponse, ApiError> {
    match probe.check_health().await {
        Ok(true) => Ok((StatusCode::OK, Json(HealthResponse::connected()))),
        Ok(false) => Err(ApiError::DatabaseUnavailable),
        Err(err) => {
            error!("Health check failed: {:#}", err);
            Err(ApiError::Unhealthy(format!("{:#}", err)))
        }
    }
}
