//! Localized UI strings.
//!
//! A [`Messages`] catalog holds one nested JSON document per locale, e.g.
//!
//! ```json
//! { "projects": { "title": "Proyectos", "filters": { "villa": "Villa" } } }
//! ```
//!
//! Strings are addressed by `(locale, namespace, key)` where the namespace
//! is a dotted path (`projects.filters`).

use std::collections::HashMap;

use crate::category::ProjectCategory;
use crate::error::CoreError;
use crate::locale::Locale;

/// Namespace holding the category labels.
pub const CATEGORY_NAMESPACE: &str = "projects.filters";

#[derive(Debug, Clone, Default)]
pub struct Messages {
    catalogs: HashMap<Locale, serde_json::Value>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and install the catalog for `locale`, replacing any previous one.
    ///
    /// The document must be a JSON object.
    pub fn insert_json(&mut self, locale: Locale, json: &str) -> Result<(), CoreError> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(|e| {
            CoreError::Validation(format!("Message catalog for '{locale}' is not valid JSON: {e}"))
        })?;
        if !value.is_object() {
            return Err(CoreError::Validation(format!(
                "Message catalog for '{locale}' must be a JSON object"
            )));
        }
        self.catalogs.insert(locale, value);
        Ok(())
    }

    /// Builder-style variant of [`Messages::insert_json`].
    pub fn with_json(mut self, locale: Locale, json: &str) -> Result<Self, CoreError> {
        self.insert_json(locale, json)?;
        Ok(self)
    }

    /// Look up a string. Returns `None` when the locale has no catalog, the
    /// path does not exist, or the leaf is not a string.
    pub fn lookup(&self, locale: Locale, namespace: &str, key: &str) -> Option<&str> {
        let mut node = self.catalogs.get(&locale)?;
        for segment in namespace.split('.').filter(|s| !s.is_empty()) {
            node = node.get(segment)?;
        }
        node.get(key)?.as_str()
    }

    /// Display label for a project category.
    ///
    /// Resolution order: catalog entry under [`CATEGORY_NAMESPACE`], then the
    /// built-in label, then the raw stored value.
    pub fn category_label(&self, locale: Locale, category: &ProjectCategory) -> String {
        self.lookup(locale, CATEGORY_NAMESPACE, category.as_str())
            .or_else(|| category.builtin_label(locale))
            .unwrap_or(category.as_str())
            .to_string()
    }
}
