//! Key-value backends for the Content Store.
//!
//! Records are addressed by `/`-separated keys relative to the store root,
//! e.g. `projects/casa-levante/data.json` or `settings/site.json`. A
//! collection is a key prefix whose direct children can be listed.

use std::collections::{BTreeMap, BTreeSet};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ContentError;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Read-only storage backend behind the content repositories.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Names of the entries directly under `collection`, in listing order.
    ///
    /// Returns `None` when the collection does not exist.
    async fn list(&self, collection: &str) -> Result<Option<Vec<String>>, ContentError>;

    /// Raw bytes of the record at `key`, or `None` when it does not exist.
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, ContentError>;
}

// ---------------------------------------------------------------------------
// ContentStore
// ---------------------------------------------------------------------------

/// Cheaply cloneable handle to a [`ContentSource`], passed to repositories
/// the way a connection pool would be.
#[derive(Clone)]
pub struct ContentStore {
    source: Arc<dyn ContentSource>,
}

impl ContentStore {
    pub fn new(source: impl ContentSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Store backed by a directory on the local filesystem.
    pub fn filesystem(root: impl Into<PathBuf>) -> Self {
        Self::new(FsContentSource::new(root))
    }

    pub async fn list(&self, collection: &str) -> Result<Option<Vec<String>>, ContentError> {
        self.source.list(collection).await
    }

    pub async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, ContentError> {
        self.source.read(key).await
    }
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore").finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Filesystem backend
// ---------------------------------------------------------------------------

/// Content read straight from a directory tree. Every call opens, reads and
/// closes; nothing is held between calls.
#[derive(Debug, Clone)]
pub struct FsContentSource {
    root: PathBuf,
}

impl FsContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, key: &str) -> PathBuf {
        key.split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }
}

#[async_trait]
impl ContentSource for FsContentSource {
    async fn list(&self, collection: &str) -> Result<Option<Vec<String>>, ContentError> {
        let dir = self.resolve(collection);
        let io_err = |source: std::io::Error| ContentError::Io {
            key: collection.to_string(),
            source,
        };

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_err(e)),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            // Non UTF-8 names cannot be slugs.
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        // Directory iteration order is platform dependent; sort so listings
        // are reproducible.
        names.sort();
        Ok(Some(names))
    }

    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, ContentError> {
        match tokio::fs::read(self.resolve(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ContentError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// In-memory backend
// ---------------------------------------------------------------------------

/// Content held in memory, keyed by record key. Listing order is the
/// lexicographic order of the keys.
#[derive(Debug, Clone, Default)]
pub struct MemoryContentSource {
    records: BTreeMap<String, Vec<u8>>,
}

impl MemoryContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.records.insert(key.into(), bytes.into());
    }

    /// Builder-style variant of [`MemoryContentSource::insert`].
    pub fn with(mut self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(key, bytes);
        self
    }
}

#[async_trait]
impl ContentSource for MemoryContentSource {
    async fn list(&self, collection: &str) -> Result<Option<Vec<String>>, ContentError> {
        let prefix = format!("{}/", collection.trim_end_matches('/'));
        let names: BTreeSet<&str> = self
            .records
            .keys()
            .filter_map(|key| key.strip_prefix(&prefix))
            .filter_map(|rest| rest.split('/').next())
            .filter(|child| !child.is_empty())
            .collect();
        Ok((!names.is_empty()).then(|| names.into_iter().map(String::from).collect()))
    }

    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, ContentError> {
        Ok(self.records.get(key).cloned())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_lists_direct_children_once() {
        let source = MemoryContentSource::new()
            .with("projects/b/data.json", "{}")
            .with("projects/a/data.json", "{}")
            .with("projects/a/cover.jpg", "")
            .with("settings/site.json", "{}");

        let names = source.list("projects").await.unwrap().unwrap();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn memory_dedupes_children_split_by_sibling_keys() {
        // "a-b/..." sorts between "a" and "a/...".
        let source = MemoryContentSource::new()
            .with("projects/a", "")
            .with("projects/a-b/data.json", "{}")
            .with("projects/a/data.json", "{}");

        let names = source.list("projects").await.unwrap().unwrap();
        assert_eq!(names, vec!["a".to_string(), "a-b".to_string()]);
    }

    #[tokio::test]
    async fn memory_missing_collection_is_none() {
        let source = MemoryContentSource::new().with("settings/site.json", "{}");
        assert!(source.list("projects").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn memory_read_absent_key_is_none() {
        let source = MemoryContentSource::new();
        assert!(source.read("press/press.json").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn fs_missing_root_lists_none() {
        let dir = tempfile::tempdir().unwrap();
        let source = FsContentSource::new(dir.path().join("nowhere"));
        assert!(source.list("projects").await.unwrap().is_none());
        assert!(source.read("settings/site.json").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn fs_lists_sorted_names() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["villa-sol", "atico-centro", "casa-mar"] {
            std::fs::create_dir_all(dir.path().join("projects").join(name)).unwrap();
        }
        let source = FsContentSource::new(dir.path());
        let names = source.list("projects").await.unwrap().unwrap();
        assert_eq!(names, vec!["atico-centro", "casa-mar", "villa-sol"]);
    }
}
