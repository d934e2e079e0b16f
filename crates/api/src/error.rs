use atelier_content::ContentError;
use atelier_core::contact::ContactRejection;
use atelier_core::error::CoreError;
use atelier_notify::NotifyError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Message returned for any contact submission that could not be handled.
pub const CONTACT_FAILURE_MESSAGE: &str = "Failed to send message";

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain errors of the workspace crates and implements
/// [`IntoResponse`] to produce consistent `{ "error", "code" }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `atelier_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Required content could not be loaded. Always a deployment defect.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// The contact form failed validation.
    #[error(transparent)]
    Contact(#[from] ContactRejection),

    /// The contact body could not be decoded.
    #[error("Malformed contact payload: {0}")]
    MalformedContact(String),

    /// The delivery channel failed for an accepted submission.
    #[error(transparent)]
    Delivery(#[from] NotifyError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} '{id}' not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Content errors (fatal configuration) ---
            AppError::Content(err) => {
                tracing::error!(error = %err, "Required content unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONTENT_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            // --- Contact intake ---
            AppError::Contact(rejection) => {
                let code = match rejection {
                    ContactRejection::MissingFields => "MISSING_FIELDS",
                    ContactRejection::InvalidEmail => "INVALID_EMAIL",
                };
                (StatusCode::BAD_REQUEST, code, rejection.to_string())
            }
            AppError::MalformedContact(msg) => {
                tracing::error!(error = %msg, "Contact form error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONTACT_FAILED",
                    CONTACT_FAILURE_MESSAGE.to_string(),
                )
            }
            AppError::Delivery(err) => {
                tracing::error!(error = %err, "Contact delivery failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONTACT_FAILED",
                    CONTACT_FAILURE_MESSAGE.to_string(),
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
