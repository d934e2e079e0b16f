//! Supported site locales and locale-dependent formatting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A site locale. Spanish is the default; every content route is
/// parameterised by one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::En];

    /// The routing code (`es`, `en`).
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    fn month_name(self, month: u32) -> Option<&'static str> {
        const ES: [&str; 12] = [
            "enero",
            "febrero",
            "marzo",
            "abril",
            "mayo",
            "junio",
            "julio",
            "agosto",
            "septiembre",
            "octubre",
            "noviembre",
            "diciembre",
        ];
        const EN: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        let idx = usize::try_from(month.checked_sub(1)?).ok()?;
        match self {
            Locale::Es => ES.get(idx).copied(),
            Locale::En => EN.get(idx).copied(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es" => Ok(Locale::Es),
            "en" => Ok(Locale::En),
            other => Err(CoreError::NotFound {
                entity: "Locale",
                id: other.to_string(),
            }),
        }
    }
}

/// Format a `YYYY-MM` press date as a long month label.
///
/// `2024-03` becomes `marzo de 2024` in Spanish and `March 2024` in
/// English. Strings that do not parse as `YYYY-MM` are returned verbatim.
pub fn format_year_month(date: &str, locale: Locale) -> String {
    let parsed = date.split_once('-').and_then(|(year, month)| {
        let year: i32 = year.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        Some((year, locale.month_name(month)?))
    });

    match (parsed, locale) {
        (Some((year, month)), Locale::Es) => format!("{month} de {year}"),
        (Some((year, month)), Locale::En) => format!("{month} {year}"),
        (None, _) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_supported_locales() {
        assert_eq!("es".parse::<Locale>().unwrap(), Locale::Es);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
    }

    #[test]
    fn rejects_unknown_locale() {
        assert_matches!(
            "fr".parse::<Locale>(),
            Err(CoreError::NotFound { entity: "Locale", .. })
        );
    }

    #[test]
    fn default_is_spanish() {
        assert_eq!(Locale::default(), Locale::Es);
    }

    #[test]
    fn formats_spanish_month() {
        assert_eq!(format_year_month("2024-03", Locale::Es), "marzo de 2024");
    }

    #[test]
    fn formats_english_month() {
        assert_eq!(format_year_month("2023-11", Locale::En), "November 2023");
    }

    #[test]
    fn out_of_range_month_is_returned_verbatim() {
        assert_eq!(format_year_month("2023-13", Locale::En), "2023-13");
        assert_eq!(format_year_month("2023-00", Locale::Es), "2023-00");
    }

    #[test]
    fn garbage_is_returned_verbatim() {
        assert_eq!(format_year_month("spring", Locale::Es), "spring");
    }
}
