//! Non-localized project endpoints.

use atelier_content::repositories::ProjectRepo;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects/slugs
///
/// Slugs of every project with a detail page, for pre-generation.
pub async fn list_slugs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let slugs = ProjectRepo::list_slugs(&state.content).await?;

    Ok(Json(DataResponse { data: slugs }))
}
