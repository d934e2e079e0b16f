//! Content Access Layer.
//!
//! Typed, read-only access to the Content Store: projects, site settings,
//! the about text and press mentions. Storage sits behind the
//! [`ContentSource`] trait; [`FsContentSource`] is the production backend.
//!
//! Absence is handled asymmetrically. Optional content (a project slug, the
//! press collection) resolves to an empty or absent result, while the
//! required singletons (site settings, about) fail with a [`ContentError`].

pub mod error;
pub mod images;
pub mod models;
pub mod repositories;
pub mod source;

pub use error::ContentError;
pub use images::project_image_path;
pub use source::{ContentSource, ContentStore, FsContentSource, MemoryContentSource};
