//! Error taxonomy for the platform
//!
//! Faults internal to the model pipeline never reach this type - they are
//! absorbed by fallback synthesis inside `wander-agentic`. What remains is
//! what the HTTP boundary must report: bad input, failed auth, missing
//! records, and persistence failures.

use thiserror::Error;

/// Errors that cross the library boundary toward the HTTP layer
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller input violates the request schema (maps to 400)
    #[error("{0}")]
    Validation(String),

    /// Missing, unknown or expired session token (maps to 401)
    #[error("{0}")]
    Unauthorized(String),

    /// Referenced record does not exist or is not owned by the caller (404)
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A requested write did not happen; there is no safe local recovery (500)
    #[error("database error: {0}")]
    Persistence(#[from] sqlx::Error),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }
}
