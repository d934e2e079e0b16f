//! Shared response envelope types for API handlers.
//!
//! Page endpoints answer with a `{ "data": ... }` envelope. The contact
//! endpoint keeps its own flat acknowledgement shape.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Body returned when a contact submission is accepted.
#[derive(Debug, Serialize)]
pub struct ContactAccepted {
    pub success: bool,
    pub message: &'static str,
}
