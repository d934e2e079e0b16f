//! Delivery of accepted contact submissions.
//!
//! The contact endpoint hands every accepted submission to an optional
//! [`ContactNotifier`]. [`EmailDelivery`] is the SMTP implementation; when it
//! is not configured the endpoint runs without a notifier.

pub mod email;

use async_trait::async_trait;
use atelier_core::contact::ContactSubmission;

pub use email::{EmailConfig, EmailDelivery, EmailError};

/// Error returned by a [`ContactNotifier`].
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error(transparent)]
    Email(#[from] EmailError),
}

/// Forwards a contact submission to the studio. Called once per accepted
/// submission and awaited within the request; implementations must not
/// retry or queue.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, submission: &ContactSubmission) -> Result<(), NotifyError>;
}
