use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    /// First failed field check; the message is shown to the user verbatim.
    #[error("{0}")]
    Validation(String),

    /// Body or query string that could not be parsed at all.
    #[error("Malformed request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({ "success": false, "error": msg }),
            ),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": msg }),
            ),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": msg }),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                return internal_error_response();
            }
        };

        (status, Json(body)).into_response()
    }
}

/// The generic 500 body. Never carries error details.
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "success": false,
            "error": "Internal server error",
            "message": "An unexpected error occurred"
        })),
    )
        .into_response()
}

/// Used by `CatchPanicLayer` so a panicking handler still answers with the generic 500.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!("Handler panicked: {detail}");
    internal_error_response()
}
