//! Error types for the pagerate server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Application error type.
///
/// Handlers either fully succeed or fail with exactly one of these kinds;
/// no partial result is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidUrl(#[from] pagerate_core::NormalizeError),

    #[error("score must be between 1 and 10, got {0}")]
    InvalidScore(i32),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidUrl(_) => (StatusCode::BAD_REQUEST, "Invalid URL".to_string()),
            AppError::InvalidScore(score) => (
                StatusCode::BAD_REQUEST,
                format!("Score must be between 1 and 10, got {}", score),
            ),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
