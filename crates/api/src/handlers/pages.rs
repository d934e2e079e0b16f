//! Localized page endpoints.
//!
//! Each handler re-reads the Content Store, so edits to content are visible
//! on the next request. The site settings and about singletons are loaded
//! here and passed into the view models explicitly.

use std::collections::HashSet;

use atelier_content::repositories::{PressRepo, ProjectRepo, SettingsRepo};
use atelier_core::error::CoreError;
use atelier_core::locale::Locale;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views::{
    ContactPage, HomePage, PressCard, ProjectCard, ProjectDetail, StudioPage, HOME_PROJECT_COUNT,
};

/// GET /api/v1/pages/{locale}/home
pub async fn home(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> AppResult<impl IntoResponse> {
    let locale: Locale = locale.parse()?;
    let settings = SettingsRepo::site(&state.content).await?;
    let about = SettingsRepo::about(&state.content).await?;

    let projects = ProjectRepo::list(&state.content)
        .await?
        .iter()
        .take(HOME_PROJECT_COUNT)
        .map(|p| ProjectCard::build(p, locale, &state.messages))
        .collect();

    Ok(Json(DataResponse {
        data: HomePage {
            projects,
            about: about.text_for(locale).to_string(),
            settings,
        },
    }))
}

/// GET /api/v1/pages/{locale}/projects
pub async fn projects(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> AppResult<impl IntoResponse> {
    let locale: Locale = locale.parse()?;

    let cards: Vec<ProjectCard> = ProjectRepo::list(&state.content)
        .await?
        .iter()
        .map(|p| ProjectCard::build(p, locale, &state.messages))
        .collect();

    Ok(Json(DataResponse { data: cards }))
}

/// GET /api/v1/pages/{locale}/projects/{slug}
///
/// Returns 404 when no project is stored under `slug`.
pub async fn project_detail(
    State(state): State<AppState>,
    Path((locale, slug)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let locale: Locale = locale.parse()?;

    let project = ProjectRepo::find_by_slug(&state.content, &slug)
        .await
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Project",
                id: slug.clone(),
            })
        })?;

    Ok(Json(DataResponse {
        data: ProjectDetail::build(&project, locale, &state.messages),
    }))
}

/// GET /api/v1/pages/{locale}/studio
pub async fn studio(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> AppResult<impl IntoResponse> {
    let locale: Locale = locale.parse()?;
    let settings = SettingsRepo::site(&state.content).await?;
    let about = SettingsRepo::about(&state.content).await?;

    Ok(Json(DataResponse {
        data: StudioPage {
            about: about.text_for(locale).to_string(),
            settings,
        },
    }))
}

/// GET /api/v1/pages/{locale}/press
///
/// An empty list is a valid answer; the renderer shows its empty state.
pub async fn press(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> AppResult<impl IntoResponse> {
    let locale: Locale = locale.parse()?;

    let items = PressRepo::list(&state.content).await?;
    let known_slugs: HashSet<String> = ProjectRepo::list_slugs(&state.content)
        .await?
        .into_iter()
        .collect();

    let cards: Vec<PressCard> = items
        .iter()
        .map(|item| PressCard::build(item, locale, &known_slugs))
        .collect();

    Ok(Json(DataResponse { data: cards }))
}

/// GET /api/v1/pages/{locale}/contact
pub async fn contact(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> AppResult<impl IntoResponse> {
    locale.parse::<Locale>()?;
    let settings = SettingsRepo::site(&state.content).await?;

    Ok(Json(DataResponse {
        data: ContactPage { settings },
    }))
}
