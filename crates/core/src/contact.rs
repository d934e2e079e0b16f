//! Contact form submissions and their validation.
//!
//! Validation runs in a fixed order: required-field presence first, then the
//! shape of the email address. The first failure wins.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// Pattern an email address must match: `local@domain.tld`, case-insensitive,
/// with a top-level domain of at least two letters.
///
/// Case folding is ASCII-only (`-u`); with Unicode folding `[A-Z]` would
/// also match characters such as U+017F and U+212A.
pub const EMAIL_PATTERN: &str = r"(?i-u)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Raw form payload as posted by the browser. Every field is optional at
/// this stage so that absence can be reported as a validation result.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    /// Read a form from any decoded JSON body.
    ///
    /// Fields are loose: `null`, `false`, `0` and `""` count as absent, and
    /// other non-string values are kept in their textual form so that they
    /// reach the email check instead of failing decoding. A body that is
    /// not an object has no fields.
    pub fn from_json(body: &Value) -> Self {
        let field = |name: &str| body.get(name).and_then(field_text);
        Self {
            name: field("name"),
            email: field("email"),
            phone: field("phone"),
            message: field("message"),
        }
    }
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    /// Phone number for display, with a placeholder when none was given.
    pub fn phone_or_placeholder(&self) -> &str {
        self.phone.as_deref().unwrap_or("Not provided")
    }
}

/// Reason a submission was rejected. The display strings are part of the
/// public HTTP contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactRejection {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,
}

/// Whether `email` matches [`EMAIL_PATTERN`].
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate a raw form. Empty strings count as missing.
pub fn validate(form: ContactForm) -> Result<ContactSubmission, ContactRejection> {
    let (Some(name), Some(email), Some(message)) = (
        non_empty(form.name),
        non_empty(form.email),
        non_empty(form.message),
    ) else {
        return Err(ContactRejection::MissingFields);
    };

    if !is_valid_email(&email) {
        return Err(ContactRejection::InvalidEmail);
    }

    Ok(ContactSubmission {
        name,
        email,
        phone: non_empty(form.phone),
        message,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
