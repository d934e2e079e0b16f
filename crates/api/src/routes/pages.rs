use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Localized page routes mounted at `/pages/{locale}`.
///
/// ```text
/// GET /home             -> home
/// GET /projects         -> projects
/// GET /projects/{slug}  -> project_detail
/// GET /studio           -> studio
/// GET /press            -> press
/// GET /contact          -> contact
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/home", get(pages::home))
        .route("/projects", get(pages::projects))
        .route("/projects/{slug}", get(pages::project_detail))
        .route("/studio", get(pages::studio))
        .route("/press", get(pages::press))
        .route("/contact", get(pages::contact))
}
