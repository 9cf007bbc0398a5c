//! Error types for the items service and gateway
//!
//! Provides unified error handling using thiserror. Store and cache failures
//! have their own enums; `ApiError` is what handlers return.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Store Error Enum ==
/// Failures talking to the durable item store. Always user-visible.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Connection could not be acquired or the query failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store handed back something the service cannot represent
    #[error("Invalid store data: {0}")]
    InvalidData(String),

    /// Store-independent failure (used by in-process stores)
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Convenience Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

// == Cache Error Enum ==
/// Failures talking to the cache. Never user-visible; callers fall back to the store.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache server unreachable or command failed
    #[error("Cache unavailable: {0}")]
    Unavailable(String),

    /// Cached payload could not be encoded or decoded
    #[error("Cache payload error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<redis::RedisError> for CacheError {
    fn from(err: redis::RedisError) -> Self {
        CacheError::Unavailable(err.to_string())
    }
}

/// Convenience Result type for cache operations.
pub type CacheResult<T> = std::result::Result<T, CacheError>;

// == Api Error Enum ==
/// Unified error type returned by HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Requested resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Gateway could not reach the backend, or the backend failed
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new(msg.clone())),
            ApiError::InvalidRequest(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::new(msg.clone()),
            ),
            ApiError::Store(err) => {
                tracing::error!(error = %err, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error"),
                )
            }
            ApiError::BackendUnavailable(details) => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse::new("Backend unavailable").with_details(details.clone()),
            ),
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
