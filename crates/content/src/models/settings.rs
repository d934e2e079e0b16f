//! Singleton records under `settings/`.

use atelier_core::locale::Locale;
use serde::{Deserialize, Serialize};

/// Studio-wide settings (`settings/site.json`).
///
/// Records are authored in camelCase; serialized output uses snake_case
/// like the rest of the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SiteSettings {
    pub studio_name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub pinterest: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    pub seo_title: String,
    pub seo_description: String,
}

/// Bilingual studio presentation text (`settings/about.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct About {
    pub text: String,
    pub text_en: String,
}

impl About {
    pub fn text_for(&self, locale: Locale) -> &str {
        match locale {
            Locale::Es => &self.text,
            Locale::En => &self.text_en,
        }
    }
}
