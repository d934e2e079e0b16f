//! Loading of the localized string catalogs from disk.

use std::io::ErrorKind;
use std::path::Path;

use atelier_core::error::CoreError;
use atelier_core::locale::Locale;
use atelier_core::messages::Messages;

/// Load `{dir}/{locale}.json` for every supported locale.
///
/// A missing catalog is logged and left empty, so lookups fall back to
/// built-in labels and raw values. A catalog that exists but cannot be read
/// or parsed is an error.
pub fn load_messages(dir: &Path) -> Result<Messages, CoreError> {
    let mut messages = Messages::new();

    for locale in Locale::ALL {
        let path = dir.join(format!("{locale}.json"));
        match std::fs::read_to_string(&path) {
            Ok(json) => {
                messages.insert_json(locale, &json)?;
                tracing::debug!(path = %path.display(), "Loaded message catalog");
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Message catalog not found");
            }
            Err(e) => {
                return Err(CoreError::Validation(format!(
                    "Failed to read message catalog {}: {e}",
                    path.display()
                )));
            }
        }
    }

    Ok(messages)
}
