//! Where raw collection text comes from.
//!
//! [`FsSource`] reads the JSON files of a content directory. [`MemorySource`]
//! holds the text in memory and counts reads, which is what tests and the CLI's
//! `query` command against inline fixtures use.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use folio_core::enums::CollectionName;

use crate::error::ContentLoadError;

/// Read access to the raw text of each collection.
pub trait ContentSource: Send + Sync {
    /// Return the full source text of `collection`.
    ///
    /// # Errors
    ///
    /// Returns `ContentLoadError::Missing` when the collection has no source
    /// and `ContentLoadError::Io` when it exists but cannot be read.
    fn read(&self, collection: CollectionName) -> Result<String, ContentLoadError>;

    /// Human-readable location of `collection`, for logs and reports.
    fn location(&self, collection: CollectionName) -> String;
}

impl<S: ContentSource + ?Sized> ContentSource for std::sync::Arc<S> {
    fn read(&self, collection: CollectionName) -> Result<String, ContentLoadError> {
        (**self).read(collection)
    }

    fn location(&self, collection: CollectionName) -> String {
        (**self).location(collection)
    }
}

// ---------------------------------------------------------------------------
// FsSource
// ---------------------------------------------------------------------------

/// A content directory on disk: `<dir>/profile.json`, `<dir>/projects.json`, ...
#[derive(Debug, Clone)]
pub struct FsSource {
    dir: PathBuf,
}

impl FsSource {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `collection`.
    #[must_use]
    pub fn path(&self, collection: CollectionName) -> PathBuf {
        self.dir.join(collection.file_name())
    }
}

impl ContentSource for FsSource {
    fn read(&self, collection: CollectionName) -> Result<String, ContentLoadError> {
        let path = self.path(collection);
        std::fs::read_to_string(&path).map_err(|source| {
            let location = path.display().to_string();
            if source.kind() == std::io::ErrorKind::NotFound {
                ContentLoadError::Missing {
                    collection,
                    location,
                }
            } else {
                ContentLoadError::Io {
                    collection,
                    location,
                    source,
                }
            }
        })
    }

    fn location(&self, collection: CollectionName) -> String {
        self.path(collection).display().to_string()
    }
}

// ---------------------------------------------------------------------------
// MemorySource
// ---------------------------------------------------------------------------

/// In-memory collection text with a read counter.
#[derive(Debug, Default)]
pub struct MemorySource {
    files: HashMap<CollectionName, String>,
    reads: AtomicUsize,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text of `collection`, replacing any previous value.
    #[must_use]
    pub fn with(mut self, collection: CollectionName, text: impl Into<String>) -> Self {
        self.files.insert(collection, text.into());
        self
    }

    /// Number of `read` calls so far, successful or not.
    #[must_use]
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl ContentSource for MemorySource {
    fn read(&self, collection: CollectionName) -> Result<String, ContentLoadError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.files
            .get(&collection)
            .cloned()
            .ok_or_else(|| ContentLoadError::Missing {
                collection,
                location: self.location(collection),
            })
    }

    fn location(&self, collection: CollectionName) -> String {
        format!("memory:{}", collection.file_name())
    }
}
