//! Project categories.
//!
//! The studio catalogues projects under a fixed set of categories. Records
//! authored with a value outside that set are still accepted: the raw value
//! is kept so it can be displayed as-is.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectCategory {
    Flat,
    Villa,
    BeachHouse,
    CountryHouse,
    Penthouse,
    Office,
    Retail,
    Hotel,
    /// A stored value outside the fixed set.
    Other(String),
}

impl ProjectCategory {
    /// The eight known categories in catalogue order.
    pub const KNOWN: [ProjectCategory; 8] = [
        ProjectCategory::Flat,
        ProjectCategory::Villa,
        ProjectCategory::BeachHouse,
        ProjectCategory::CountryHouse,
        ProjectCategory::Penthouse,
        ProjectCategory::Office,
        ProjectCategory::Retail,
        ProjectCategory::Hotel,
    ];

    /// The stored value, also used as the translation key.
    pub fn as_str(&self) -> &str {
        match self {
            ProjectCategory::Flat => "flat",
            ProjectCategory::Villa => "villa",
            ProjectCategory::BeachHouse => "beach-house",
            ProjectCategory::CountryHouse => "country-house",
            ProjectCategory::Penthouse => "penthouse",
            ProjectCategory::Office => "office",
            ProjectCategory::Retail => "retail",
            ProjectCategory::Hotel => "hotel",
            ProjectCategory::Other(raw) => raw,
        }
    }

    /// Built-in display label, `None` for values outside the fixed set.
    pub fn builtin_label(&self, locale: Locale) -> Option<&'static str> {
        let (es, en) = match self {
            ProjectCategory::Flat => ("Piso", "Flat"),
            ProjectCategory::Villa => ("Villa", "Villa"),
            ProjectCategory::BeachHouse => ("Casa de playa", "Beach House"),
            ProjectCategory::CountryHouse => ("Casa de campo", "Country House"),
            ProjectCategory::Penthouse => ("Ático", "Penthouse"),
            ProjectCategory::Office => ("Oficina", "Office"),
            ProjectCategory::Retail => ("Comercio", "Retail"),
            ProjectCategory::Hotel => ("Hotel", "Hotel"),
            ProjectCategory::Other(_) => return None,
        };
        Some(match locale {
            Locale::Es => es,
            Locale::En => en,
        })
    }
}

impl From<String> for ProjectCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "flat" => ProjectCategory::Flat,
            "villa" => ProjectCategory::Villa,
            "beach-house" => ProjectCategory::BeachHouse,
            "country-house" => ProjectCategory::CountryHouse,
            "penthouse" => ProjectCategory::Penthouse,
            "office" => ProjectCategory::Office,
            "retail" => ProjectCategory::Retail,
            "hotel" => ProjectCategory::Hotel,
            _ => ProjectCategory::Other(value),
        }
    }
}

impl From<ProjectCategory> for String {
    fn from(value: ProjectCategory) -> Self {
        match value {
            ProjectCategory::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
