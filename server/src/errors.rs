use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::FieldErrors;
use feed::FetchError;
use serde_json::json;
use thiserror::Error;

/// Error type for every handler. Renders as
/// `{ "error": { "code", "message" } }`, plus `fields` for validation failures.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Application form has errors")]
    Validation(FieldErrors),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Feed error: {0}")]
    Fetch(#[from] FetchError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                self.to_string(),
            ),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Fetch(e) => {
                tracing::warn!("Feed error: {e}");
                (StatusCode::BAD_GATEWAY, "FEED_ERROR", e.user_message())
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let AppError::Validation(fields) = &self {
            error["fields"] = json!(fields);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
