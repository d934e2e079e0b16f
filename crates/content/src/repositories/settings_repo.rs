use serde::de::DeserializeOwned;

use crate::error::ContentError;
use crate::models::settings::{About, SiteSettings};
use crate::repositories::{ABOUT_KEY, SITE_SETTINGS_KEY};
use crate::source::ContentStore;

/// Access to the required singleton records. Absence or a parse failure is
/// an error; no default is ever synthesised.
pub struct SettingsRepo;

impl SettingsRepo {
    pub async fn site(store: &ContentStore) -> Result<SiteSettings, ContentError> {
        load_required(store, SITE_SETTINGS_KEY).await
    }

    pub async fn about(store: &ContentStore) -> Result<About, ContentError> {
        load_required(store, ABOUT_KEY).await
    }
}

async fn load_required<T: DeserializeOwned>(
    store: &ContentStore,
    key: &str,
) -> Result<T, ContentError> {
    let bytes = store
        .read(key)
        .await?
        .ok_or_else(|| ContentError::MissingRecord {
            key: key.to_string(),
        })?;

    serde_json::from_slice(&bytes).map_err(|source| ContentError::Malformed {
        key: key.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::source::MemoryContentSource;

    const SITE: &str = r#"{
        "studioName": "Estudio Norte",
        "address": "Calle Mayor 1",
        "city": "Marbella",
        "phone": "+34 952 000 000",
        "email": "hola@estudionorte.es",
        "instagram": "https://instagram.com/estudionorte",
        "seoTitle": "Estudio Norte",
        "seoDescription": "Arquitectura e interiorismo"
    }"#;

    #[tokio::test]
    async fn loads_site_settings() {
        let store = ContentStore::new(MemoryContentSource::new().with(SITE_SETTINGS_KEY, SITE));
        let settings = SettingsRepo::site(&store).await.unwrap();
        assert_eq!(settings.studio_name, "Estudio Norte");
        assert_eq!(settings.pinterest, None);
    }

    #[tokio::test]
    async fn missing_site_settings_is_fatal() {
        let store = ContentStore::new(MemoryContentSource::new());
        assert_matches!(
            SettingsRepo::site(&store).await,
            Err(ContentError::MissingRecord { key }) if key == SITE_SETTINGS_KEY
        );
    }

    #[tokio::test]
    async fn malformed_about_is_fatal() {
        let store = ContentStore::new(MemoryContentSource::new().with(ABOUT_KEY, r#"{"text":1}"#));
        assert_matches!(
            SettingsRepo::about(&store).await,
            Err(ContentError::Malformed { .. })
        );
    }
}
