//! Page view models.
//!
//! Renderers never see storage records directly. Each page endpoint shapes
//! content into one of these structs for a given locale: category labels are
//! translated, descriptions localized, and image names turned into public
//! paths.

use std::collections::HashSet;

use atelier_content::models::press::PressItem;
use atelier_content::models::project::Project;
use atelier_content::models::settings::SiteSettings;
use atelier_content::project_image_path;
use atelier_core::locale::{format_year_month, Locale};
use atelier_core::messages::Messages;
use serde::Serialize;

/// Number of project cards shown on the home page.
pub const HOME_PROJECT_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// A project as shown in grids and on the home page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub location: String,
    pub year: i32,
    pub image: Option<String>,
}

impl ProjectCard {
    pub fn build(project: &Project, locale: Locale, messages: &Messages) -> Self {
        Self {
            slug: project.slug.clone(),
            title: project.title.clone(),
            category: messages.category_label(locale, &project.category),
            location: project.location.clone(),
            year: project.year,
            image: project
                .main_image
                .as_deref()
                .map(|img| project_image_path(&project.slug, img)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

/// Everything the project detail page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetail {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub location: String,
    pub year: i32,
    pub photographer: Option<String>,
    pub hero_image: Option<String>,
    pub gallery: Vec<GalleryImage>,
}

impl ProjectDetail {
    pub fn build(project: &Project, locale: Locale, messages: &Messages) -> Self {
        let gallery = project
            .gallery
            .iter()
            .map(|img| GalleryImage {
                src: project_image_path(&project.slug, img),
                alt: project.title.clone(),
            })
            .collect();

        Self {
            slug: project.slug.clone(),
            title: project.title.clone(),
            category: messages.category_label(locale, &project.category),
            description: project.description_for(locale).to_string(),
            location: project.location.clone(),
            year: project.year,
            photographer: project.photographer.clone(),
            hero_image: project
                .main_image
                .as_deref()
                .map(|img| project_image_path(&project.slug, img)),
            gallery,
        }
    }
}

// ---------------------------------------------------------------------------
// Press
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressCard {
    pub id: String,
    pub publication: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    /// Long month label, e.g. `marzo de 2024`.
    pub date_label: String,
    pub image: String,
    pub url: String,
    /// Set only when the linked project exists.
    pub project_slug: Option<String>,
}

impl PressCard {
    pub fn build(item: &PressItem, locale: Locale, known_slugs: &HashSet<String>) -> Self {
        Self {
            id: item.id.clone(),
            publication: item.publication.clone(),
            title: item.title.get(locale).to_string(),
            excerpt: item.excerpt.get(locale).to_string(),
            date: item.date.clone(),
            date_label: format_year_month(&item.date, locale),
            image: item.image.clone(),
            url: item.url.clone(),
            project_slug: item
                .project_slug
                .clone()
                .filter(|slug| known_slugs.contains(slug)),
        }
    }
}

// ---------------------------------------------------------------------------
// Static pages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub projects: Vec<ProjectCard>,
    pub about: String,
    pub settings: SiteSettings,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudioPage {
    pub about: String,
    pub settings: SiteSettings,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactPage {
    pub settings: SiteSettings,
}
