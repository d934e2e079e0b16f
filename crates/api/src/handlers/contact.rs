//! Contact form intake.

use atelier_core::contact::{self, ContactForm};
use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::ContactAccepted;
use crate::state::AppState;

/// POST /api/contact
///
/// Validate a submission, log it, and hand it to the notifier when one is
/// configured. Delivery is awaited; its failure fails the request.
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let body: serde_json::Value =
        serde_json::from_slice(&body).map_err(|e| AppError::MalformedContact(e.to_string()))?;

    let submission = contact::validate(ContactForm::from_json(&body))?;

    tracing::info!(
        name = %submission.name,
        email = %submission.email,
        phone = %submission.phone_or_placeholder(),
        message = %submission.message,
        timestamp = %chrono::Utc::now().to_rfc3339(),
        "Contact form submission",
    );

    if let Some(notifier) = &state.notifier {
        notifier.notify(&submission).await?;
    }

    Ok(Json(ContactAccepted {
        success: true,
        message: "Message sent successfully",
    }))
}
