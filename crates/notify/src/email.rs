//! Contact notification via SMTP.
//!
//! [`EmailDelivery`] wraps the `lettre` async SMTP transport and sends one
//! plain-text email per accepted submission to the studio inbox, with the
//! visitor's address as `Reply-To`. If `SMTP_HOST` is not set,
//! [`EmailConfig::from_env`] returns `None` and no mailer is constructed.

use async_trait::async_trait;
use atelier_core::contact::ContactSubmission;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::{ContactNotifier, NotifyError};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// A sender, recipient or reply-to address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@atelier.local";

/// Configuration for the SMTP email delivery service.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and should be skipped.
    ///
    /// | Variable        | Required | Default                  |
    /// |-----------------|----------|--------------------------|
    /// | `SMTP_HOST`     | yes      | -                        |
    /// | `SMTP_PORT`     | no       | `587`                    |
    /// | `SMTP_FROM`     | no       | `noreply@atelier.local`  |
    /// | `SMTP_USER`     | no       | -                        |
    /// | `SMTP_PASSWORD` | no       | -                        |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// EmailDelivery
// ---------------------------------------------------------------------------

/// Sends contact submissions to the studio inbox via SMTP.
pub struct EmailDelivery {
    config: EmailConfig,
    recipient: String,
}

impl EmailDelivery {
    /// Create a mailer that delivers to `recipient`.
    pub fn new(config: EmailConfig, recipient: impl Into<String>) -> Self {
        Self {
            config,
            recipient: recipient.into(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Assemble the notification email for a submission.
    pub fn build_message(&self, submission: &ContactSubmission) -> Result<Message, EmailError> {
        Message::builder()
            .from(self.config.from_address.parse()?)
            .to(self.recipient.parse()?)
            .reply_to(submission.email.parse()?)
            .subject(format!("Nuevo contacto de {}", submission.name))
            .header(ContentType::TEXT_PLAIN)
            .body(compose_body(submission))
            .map_err(|e| EmailError::Build(e.to_string()))
    }

    async fn send(&self, submission: &ContactSubmission) -> Result<(), EmailError> {
        let email = self.build_message(submission)?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(to = %self.recipient, from = %submission.email, "Contact email sent");
        Ok(())
    }
}

#[async_trait]
impl ContactNotifier for EmailDelivery {
    async fn notify(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        self.send(submission).await.map_err(NotifyError::from)
    }
}

/// Plain-text body of the notification email.
pub fn compose_body(submission: &ContactSubmission) -> String {
    format!(
        "Nuevo mensaje de contacto\n\n\
         Nombre: {}\n\
         Email: {}\n\
         Teléfono: {}\n\n\
         Mensaje:\n{}\n",
        submission.name,
        submission.email,
        submission.phone.as_deref().unwrap_or("No proporcionado"),
        submission.message,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EmailConfig {
        EmailConfig {
            smtp_host: "smtp.example.com".into(),
            smtp_port: DEFAULT_SMTP_PORT,
            from_address: DEFAULT_FROM_ADDRESS.into(),
            smtp_user: None,
            smtp_password: None,
        }
    }

    fn submission(email: &str) -> ContactSubmission {
        ContactSubmission {
            name: "Ana".into(),
            email: email.into(),
            phone: None,
            message: "Quiero reformar mi piso".into(),
        }
    }

    #[test]
    fn from_env_returns_none_without_smtp_host() {
        std::env::remove_var("SMTP_HOST");
        assert!(EmailConfig::from_env().is_none());
    }

    #[test]
    fn body_lists_fields_with_phone_placeholder() {
        let body = compose_body(&submission("ana@example.com"));
        assert!(body.contains("Nombre: Ana"));
        assert!(body.contains("Email: ana@example.com"));
        assert!(body.contains("No proporcionado"));
        assert!(body.ends_with("Quiero reformar mi piso\n"));
    }

    #[test]
    fn message_is_addressed_to_the_studio() {
        let mailer = EmailDelivery::new(config(), "info@estudionorte.es");
        let message = mailer.build_message(&submission("ana@example.com")).unwrap();

        let to: Vec<String> = message
            .envelope()
            .to()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(to, vec!["info@estudionorte.es".to_string()]);
        assert_eq!(
            message.headers().get_raw("Subject"),
            Some("Nuevo contacto de Ana")
        );
    }

    #[test]
    fn unparseable_reply_to_is_an_address_error() {
        let mailer = EmailDelivery::new(config(), "info@estudionorte.es");
        let err = mailer.build_message(&submission("not an address")).unwrap_err();
        assert!(err.to_string().contains("Email address parse error"));
    }

    #[test]
    fn email_error_display_build() {
        let err = EmailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }
}
