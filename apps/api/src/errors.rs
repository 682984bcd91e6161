use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::profile::{AttachmentError, UnknownField};
use crate::wizard::WizardError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(#[from] WizardError),

    #[error("Upload error: {0}")]
    Upload(#[from] MultipartError),

    #[error("Attachment error: {0}")]
    Attachment(#[from] AttachmentError),
}

impl From<UnknownField> for AppError {
    fn from(e: UnknownField) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(e) => (StatusCode::CONFLICT, "INVALID_TRANSITION", e.to_string()),
            AppError::Upload(e) => {
                tracing::warn!("Multipart upload failed: {e}");
                (e.status(), "UPLOAD_ERROR", e.body_text())
            }
            AppError::Attachment(e) => {
                tracing::warn!("Attachment rejected: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "ATTACHMENT_ERROR",
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
