use crate::error::ContentError;
use crate::models::project::Project;
use crate::repositories::{PROJECTS_COLLECTION, PROJECT_RECORD};
use crate::source::ContentStore;

/// Access to project records.
///
/// Projects are best effort: an entry without a readable, parseable
/// `data.json` is left out of every listing and resolves to `None`.
pub struct ProjectRepo;

impl ProjectRepo {
    /// All projects, ascending by display order. Entries with equal order
    /// keep their storage listing order. A missing projects collection
    /// yields an empty list.
    pub async fn list(store: &ContentStore) -> Result<Vec<Project>, ContentError> {
        let Some(entries) = store.list(PROJECTS_COLLECTION).await? else {
            return Ok(Vec::new());
        };

        let mut projects = Vec::with_capacity(entries.len());
        for slug in entries.iter().filter(|name| !name.starts_with('.')) {
            if let Some(project) = load_entry(store, slug).await {
                projects.push(project);
            }
        }

        projects.sort_by_key(Project::display_order);
        Ok(projects)
    }

    /// Projects flagged as featured, in listing order.
    pub async fn list_featured(store: &ContentStore) -> Result<Vec<Project>, ContentError> {
        let mut projects = Self::list(store).await?;
        projects.retain(|p| p.featured);
        Ok(projects)
    }

    /// Slugs of every listable project, in listing order.
    pub async fn list_slugs(store: &ContentStore) -> Result<Vec<String>, ContentError> {
        let projects = Self::list(store).await?;
        Ok(projects.into_iter().map(|p| p.slug).collect())
    }

    /// The project stored under `slug`, or `None` if there is none.
    ///
    /// Slugs that could escape the projects collection are never looked up.
    pub async fn find_by_slug(store: &ContentStore, slug: &str) -> Option<Project> {
        if !is_storage_safe_slug(slug) {
            tracing::debug!(slug, "Rejected project slug");
            return None;
        }
        load_entry(store, slug).await
    }
}

fn is_storage_safe_slug(slug: &str) -> bool {
    !slug.is_empty() && !slug.starts_with('.') && !slug.contains(['/', '\\'])
}

/// Read and parse one project folder. Every failure is logged and turned
/// into `None`.
async fn load_entry(store: &ContentStore, slug: &str) -> Option<Project> {
    let key = format!("{PROJECTS_COLLECTION}/{slug}/{PROJECT_RECORD}");

    let bytes = match store.read(&key).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            tracing::debug!(slug, "Project entry has no data record, skipping");
            return None;
        }
        Err(e) => {
            tracing::warn!(slug, error = %e, "Failed to read project record, skipping");
            return None;
        }
    };

    match serde_json::from_slice::<Project>(&bytes) {
        Ok(mut project) => {
            project.slug = slug.to_string();
            Some(project)
        }
        Err(e) => {
            tracing::warn!(slug, error = %e, "Malformed project record, skipping");
            None
        }
    }
}
