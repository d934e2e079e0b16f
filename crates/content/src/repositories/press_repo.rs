use crate::error::ContentError;
use crate::models::press::PressItem;
use crate::repositories::PRESS_KEY;
use crate::source::ContentStore;

pub struct PressRepo;

impl PressRepo {
    /// All press items, newest first.
    ///
    /// The collection is optional: a missing file yields an empty list, a
    /// file that is not a JSON array is logged and yields an empty list, and
    /// individual items that do not parse are skipped. Ordering compares the
    /// `YYYY-MM` date strings, so equal dates keep their file order.
    pub async fn list(store: &ContentStore) -> Result<Vec<PressItem>, ContentError> {
        let Some(bytes) = store.read(PRESS_KEY).await? else {
            return Ok(Vec::new());
        };

        let raw: Vec<serde_json::Value> = match serde_json::from_slice(&bytes) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(key = PRESS_KEY, error = %e, "Press collection is malformed");
                return Ok(Vec::new());
            }
        };

        let mut items: Vec<PressItem> = raw
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping malformed press item");
                    None
                }
            })
            .collect();

        items.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(items)
    }
}
