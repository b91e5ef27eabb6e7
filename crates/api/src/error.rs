use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lectern_core::{CoreError, ErrorKind};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `lectern_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a core error into an HTTP status, error code, and message.
///
/// - Missing entities map to 404.
/// - Rule violations (required, empty, conflict, format) map to 400.
/// - Storage failures map to 500 with a sanitized message.
fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err.kind() {
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, err.code(), err.to_string()),
        ErrorKind::Required | ErrorKind::Empty | ErrorKind::Conflict | ErrorKind::Format => {
            (StatusCode::BAD_REQUEST, err.code(), err.to_string())
        }
        ErrorKind::Storage => {
            tracing::error!(error = %err, "Storage error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                err.code(),
                "An internal error occurred".to_string(),
            )
        }
    }
}
