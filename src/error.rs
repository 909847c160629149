// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::engine::EvaluationError;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // 500 Internal Server Error
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    // 400 Bad Request
    #[error("Bad request: {0}")]
    BadRequest(String),

    // 401 Unauthorized
    #[error("Unauthorized: {0}")]
    AuthError(String),

    // 403 Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    // 404 Not Found
    #[error("Not found: {0}")]
    NotFound(String),

    // 409 Conflict (e.g., duplicate email)
    #[error("Conflict: {0}")]
    Conflict(String),

    // Startup only, never produced by a handler
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InternalServerError(msg) | AppError::Config(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::AuthError(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Converts `sqlx::Error` into `AppError::InternalServerError`.
/// Allows using `?` operator on database queries.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Maps the engine taxonomy onto HTTP semantics.
impl From<EvaluationError> for AppError {
    fn from(err: EvaluationError) -> Self {
        match err {
            EvaluationError::StudentNotFound(_) | EvaluationError::CourseNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            EvaluationError::InvalidSubmission(_) => AppError::BadRequest(err.to_string()),
            EvaluationError::Storage(msg) => AppError::InternalServerError(msg),
        }
    }
}
