//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use sensorhub_domain::error::SensorHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`SensorHubError`] to an HTTP response with appropriate status code.
pub struct ApiError(SensorHubError);

impl From<SensorHubError> for ApiError {
    fn from(err: SensorHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SensorHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            SensorHubError::Auth => (StatusCode::UNAUTHORIZED, self.0.to_string()),
            SensorHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            SensorHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            SensorHubError::Hash(err) => {
                tracing::error!(error = %err, "password hashing error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
