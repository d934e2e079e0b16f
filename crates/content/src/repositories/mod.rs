//! Read operations over the Content Store, one repository per record kind.
//!
//! Repositories are zero-sized; every operation takes the [`ContentStore`]
//! explicitly and re-reads storage on each call.
//!
//! [`ContentStore`]: crate::source::ContentStore

pub mod press_repo;
pub mod project_repo;
pub mod settings_repo;

pub use press_repo::PressRepo;
pub use project_repo::ProjectRepo;
pub use settings_repo::SettingsRepo;

/// Collection holding one folder per project.
pub const PROJECTS_COLLECTION: &str = "projects";

/// Record file inside each project folder.
pub const PROJECT_RECORD: &str = "data.json";

/// Site settings singleton.
pub const SITE_SETTINGS_KEY: &str = "settings/site.json";

/// About text singleton.
pub const ABOUT_KEY: &str = "settings/about.json";

/// Press collection record.
pub const PRESS_KEY: &str = "press/press.json";
