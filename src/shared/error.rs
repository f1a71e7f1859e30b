//! Application Error Types
//!
//! Centralized error handling with Axum integration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::services::CreationError;
use crate::infrastructure::store::StoreError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into())
            }
            AppError::Store(e) => {
                tracing::error!("Store error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<CreationError> for AppError {
    fn from(err: CreationError) -> Self {
        match err {
            CreationError::InvalidInput(msg) => AppError::BadRequest(msg),
            e @ (CreationError::ApplicationNotFound(_) | CreationError::ChatNotFound { .. }) => {
                AppError::NotFound(e.to_string())
            }
            CreationError::Store(e) => AppError::Store(e),
            e @ (CreationError::Serialization(_) | CreationError::DeadlineExceeded(_)) => {
                AppError::Internal(e.to_string())
            }
        }
    }
}
