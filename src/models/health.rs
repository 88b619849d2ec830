use chrono::{DateTime, Utc};
use serde::Serialize;

/// API version reported by the health endpoint. Pinned independently of the
/// crate version so the frontend contract does not move with every release.
pub const API_VERSION: &str = "1.0.0";

/// Body of a successful health check. Only ever constructed when the
/// datastore is reachable; failure paths return an error response instead,
/// so `status` is always `"healthy"` by construction.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub database: String,
    pub version: String,
}

impl HealthResponse {
    /// Build a fresh response stamped with the current UTC instant.
    pub fn connected() -> Self {
        HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            database: "connected".to_string(),
            version: API_VERSION.to_string(),
        }
    }
}
