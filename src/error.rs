use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The datastore answered the reachability check negatively.
    #[error("Database connection failed")]
    DatabaseUnavailable,

    /// The reachability check itself faulted; carries the fault description.
    #[error("Service unhealthy: {0}")]
    Unhealthy(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::DatabaseUnavailable | ApiError::Unhealthy(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        };

        // Failure bodies always carry a single `detail` field, matching what
        // the frontend expects from the API.
        let body = Json(json!({ "detail": self.to_string() }));

        (status, body).into_response()
    }
}

// Result type alias for convenience
pub type ApiResult<T> = Result<T, ApiError>;
