//! Press mentions (`press/press.json`).

use atelier_core::locale::Locale;
use serde::{Deserialize, Serialize};

/// A string written in both site languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub es: String,
    pub en: String,
}

impl LocalizedText {
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Es => &self.es,
            Locale::En => &self.en,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct PressItem {
    pub id: String,
    pub publication: String,
    pub title: LocalizedText,
    pub excerpt: LocalizedText,
    /// Publication month as `YYYY-MM`.
    pub date: String,
    pub image: String,
    pub url: String,
    #[serde(default)]
    pub project_slug: Option<String>,
}
