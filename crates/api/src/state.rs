use std::sync::Arc;

use atelier_content::ContentStore;
use atelier_core::messages::Messages;
use atelier_notify::ContactNotifier;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable. Content is not cached here: every handler
/// re-reads the Content Store through `content`.
#[derive(Clone)]
pub struct AppState {
    /// Content Store handle.
    pub content: ContentStore,
    /// Localized UI strings, loaded once at startup.
    pub messages: Arc<Messages>,
    /// Delivery channel for contact submissions. `None` means submissions
    /// are only logged.
    pub notifier: Option<Arc<dyn ContactNotifier>>,
}
