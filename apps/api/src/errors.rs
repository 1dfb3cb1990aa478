use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Raised when a completion does not carry the section markers a parser requires.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("Model did not return required Summary/Action Items sections")]
    MissingSummarySections,

    #[error("Model did not follow the required Subject/Body format")]
    MissingEmailSections,
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Llm(#[from] LlmError),

    #[error("{0}")]
    Format(#[from] FormatError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Provider failures and unformatted replies surface identically to callers.
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Llm(e) => {
                tracing::error!("Completion call failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "COMPLETION_ERROR",
                    e.to_string(),
                )
            }
            AppError::Format(e) => {
                tracing::error!("Completion was not in the expected format: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "COMPLETION_ERROR",
                    e.to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_is_a_server_error_with_detail() {
        let response = AppError::from(FormatError::MissingSummarySections).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_llm_error_is_a_server_error() {
        let err = AppError::from(LlmError::Api {
            status: 401,
            message: "Invalid API Key".to_string(),
        });
        assert!(err.to_string().contains("Invalid API Key"));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let response = AppError::Validation("missing field `call_id`".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
