//! Project records (`projects/{slug}/data.json`).

use atelier_core::category::ProjectCategory;
use atelier_core::locale::Locale;
use serde::{Deserialize, Serialize};

/// A catalogued project. The slug is the name of the storage folder; any
/// `slug` field inside the data file is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Project {
    #[serde(skip_deserializing)]
    pub slug: String,
    pub title: String,
    pub category: ProjectCategory,
    pub location: String,
    pub year: i32,
    #[serde(default)]
    pub photographer: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub featured: bool,
    /// Display position as authored. Missing or `null` sorts as 0.
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub main_image: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl Project {
    pub fn display_order(&self) -> i64 {
        self.order.unwrap_or(0)
    }

    /// Description for `locale`. English falls back to the Spanish text when
    /// no English variant was written.
    pub fn description_for(&self, locale: Locale) -> &str {
        match (locale, self.description_en.as_deref()) {
            (Locale::En, Some(en)) if !en.is_empty() => en,
            _ => &self.description,
        }
    }
}
