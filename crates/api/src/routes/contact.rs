use axum::routing::post;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Contact intake, mounted at the root (`/api/contact`).
pub fn router() -> Router<AppState> {
    Router::new().route("/api/contact", post(contact::submit_contact))
}
