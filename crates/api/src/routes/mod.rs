pub mod contact;
pub mod health;
pub mod pages;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects/slugs                          slugs with a detail page
///
/// /pages/{locale}/home                     home page
/// /pages/{locale}/projects                 project grid
/// /pages/{locale}/projects/{slug}          project detail
/// /pages/{locale}/studio                   studio page
/// /pages/{locale}/press                    press mentions
/// /pages/{locale}/contact                  contact details
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/projects/slugs", get(handlers::projects::list_slugs))
        .nest("/pages/{locale}", pages::router())
}
