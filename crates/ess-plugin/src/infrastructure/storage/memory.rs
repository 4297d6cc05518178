//! In-memory document store.
//!
//! Allows tests to seed documents, count writes, and simulate a read-only
//! disk without touching the file system.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::application::load_config::{DocumentStore, StoreError};

/// A [`DocumentStore`] holding documents in a map.
#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: Mutex<HashMap<PathBuf, String>>,
    write_count: Mutex<u32>,
    read_only: bool,
}

impl MemoryDocumentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store whose writes always fail.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Seeds a document at `path` without counting it as a write.
    pub fn with_document(self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.documents
            .lock()
            .expect("lock poisoned")
            .insert(path.into(), text.into());
        self
    }

    /// Returns the current text at `path`.
    pub fn document(&self, path: &Path) -> Option<String> {
        self.documents.lock().expect("lock poisoned").get(path).cloned()
    }

    /// Returns the number of successful [`DocumentStore::write_all_text`] calls.
    pub fn write_count(&self) -> u32 {
        *self.write_count.lock().expect("lock poisoned")
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn exists(&self, path: &Path) -> bool {
        self.documents.lock().expect("lock poisoned").contains_key(path)
    }

    fn read_all_text(&self, path: &Path) -> Result<String, StoreError> {
        self.document(path)
            .ok_or_else(|| StoreError::NotFound(path.to_path_buf()))
    }

    fn write_all_text(&self, path: &Path, text: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "store is read-only"),
            });
        }
        self.documents
            .lock()
            .expect("lock poisoned")
            .insert(path.to_path_buf(), text.to_string());
        *self.write_count.lock().expect("lock poisoned") += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_document_exists_and_is_readable() {
        // Arrange
        let store = MemoryDocumentStore::new().with_document("config.json", "{}");

        // Act / Assert
        assert!(store.exists(Path::new("config.json")));
        assert_eq!(store.read_all_text(Path::new("config.json")).unwrap(), "{}");
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_write_stores_text_and_counts() {
        let store = MemoryDocumentStore::new();

        store.write_all_text(Path::new("a.json"), "1").unwrap();
        store.write_all_text(Path::new("a.json"), "2").unwrap();

        assert_eq!(store.document(Path::new("a.json")).as_deref(), Some("2"));
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn test_read_missing_document_returns_not_found() {
        let store = MemoryDocumentStore::new();
        let err = store.read_all_text(Path::new("missing.json")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_read_only_store_rejects_writes() {
        let store = MemoryDocumentStore::read_only();

        let result = store.write_all_text(Path::new("a.json"), "{}");

        assert!(matches!(result, Err(StoreError::Io { .. })));
        assert_eq!(store.write_count(), 0);
        assert!(!store.exists(Path::new("a.json")));
    }
}
