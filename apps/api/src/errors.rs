use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::suggestions::SuggestionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Suggestion service error: {0}")]
    Suggestion(#[from] SuggestionError),

    #[error("Suggestion service is not configured")]
    SuggestionsDisabled,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Suggestion(e) => {
                tracing::error!("Suggestion service error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SUGGESTION_ERROR",
                    "The suggestion service failed to respond".to_string(),
                )
            }
            AppError::SuggestionsDisabled => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SUGGESTIONS_DISABLED",
                "AI suggestions are not configured on this server".to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
