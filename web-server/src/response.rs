//! HTTP error responses
//!
//! Failures cross the wire as `{"detail": "..."}` with a 4xx/5xx status.
//! Model-path failures never arrive here - those resolve to 200 responses
//! carrying a fallback-flagged result.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tracing::warn;

use wanderwise::ApiError;

/// A failed request: status plus the detail string the client shows
#[derive(Debug)]
pub struct ApiFailure {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiFailure {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "detail": self.detail })),
        )
            .into_response()
    }
}

impl From<ApiError> for ApiFailure {
    fn from(err: ApiError) -> Self {
        let status = match &err {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Persistence(cause) => {
                warn!("persistence failure: {:?}", cause);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(status, err.to_string())
    }
}

impl From<sqlx::Error> for ApiFailure {
    fn from(err: sqlx::Error) -> Self {
        ApiFailure::from(ApiError::Persistence(err))
    }
}
