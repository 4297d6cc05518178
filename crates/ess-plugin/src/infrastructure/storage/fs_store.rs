//! File-system document store.
//!
//! Writes go to a uniquely named sibling temp file which is fsynced and then
//! renamed over the target.  Rename is atomic on the same file system, so a
//! reader (or the next start after a crash) sees either the previous complete
//! document or the new one, never a truncated mix.  On Unix the directory is
//! fsynced after the rename so the new entry itself survives a power loss.
//!
//! A crash between creating the temp file and renaming it leaves the temp file
//! behind.  The next write to the same document removes such leftovers first.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::application::load_config::{DocumentStore, StoreError};

/// [`DocumentStore`] backed by the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDocumentStore;

impl FsDocumentStore {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentStore for FsDocumentStore {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_all_text(&self, path: &Path) -> Result<String, StoreError> {
        fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(path.to_path_buf()),
            _ => StoreError::Io {
                path: path.to_path_buf(),
                source,
            },
        })
    }

    fn write_all_text(&self, path: &Path, text: &str) -> Result<(), StoreError> {
        let dir = parent_dir(path);
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("config.json");
        let prefix = temp_prefix(file_name);
        sweep_stale_temps(&dir, &prefix);
        let temp_path = dir.join(format!("{prefix}{}", Uuid::new_v4()));

        let result = write_synced(&temp_path, text).and_then(|()| fs::rename(&temp_path, path));
        if let Err(source) = result {
            let _ = fs::remove_file(&temp_path);
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
        if let Err(e) = sync_dir(&dir) {
            warn!("could not sync directory {}: {e}", dir.display());
        }

        debug!("wrote {} bytes to {}", text.len(), path.display());
        Ok(())
    }
}

/// Directory that will hold `path`; `.` for bare file names.
fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Name prefix shared by every temp file written for `file_name`.
fn temp_prefix(file_name: &str) -> String {
    format!(".{file_name}.tmp-")
}

/// Removes temp files a previous, interrupted write left in `dir`.
///
/// Returns how many were removed.  Failures are logged and skipped.
fn sweep_stale_temps(dir: &Path, prefix: &str) -> usize {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("could not scan {} for stale temp files: {e}", dir.display());
            return 0;
        }
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let name = entry.file_name();
        if !name.to_str().is_some_and(|name| name.starts_with(prefix)) {
            continue;
        }
        match fs::remove_file(entry.path()) {
            Ok(()) => {
                debug!("removed stale temp file {}", entry.path().display());
                removed += 1;
            }
            Err(e) => warn!("could not remove {}: {e}", entry.path().display()),
        }
    }
    removed
}

#[cfg(unix)]
fn sync_dir(dir: &Path) -> io::Result<()> {
    File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

fn write_synced(path: &Path, text: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.sync_all()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ess_store_test_{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_exists_is_false_for_missing_file() {
        let dir = temp_dir();
        assert!(!FsDocumentStore::new().exists(&dir.join("config.json")));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_exists_is_false_for_directory() {
        let dir = temp_dir();
        assert!(!FsDocumentStore::new().exists(&dir));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_then_read_returns_same_text() {
        // Arrange
        let dir = temp_dir();
        let path = dir.join("config.json");
        let store = FsDocumentStore::new();

        // Act
        store.write_all_text(&path, "{\"Locale\":\"en\"}").expect("write");
        let text = store.read_all_text(&path).expect("read");

        // Assert
        assert!(store.exists(&path));
        assert_eq!(text, "{\"Locale\":\"en\"}");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_creates_missing_parent_directories() {
        let dir = temp_dir();
        let path = dir.join("Essentials").join("nested").join("config.json");

        FsDocumentStore::new().write_all_text(&path, "{}").expect("write");

        assert!(path.is_file());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_replaces_existing_document_and_leaves_no_temp_files() {
        let dir = temp_dir();
        let path = dir.join("config.json");
        let store = FsDocumentStore::new();

        store.write_all_text(&path, "old").expect("first write");
        store.write_all_text(&path, "new").expect("second write");

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        let entries: Vec<_> = fs::read_dir(&dir).unwrap().collect();
        assert_eq!(entries.len(), 1, "temp files must be renamed away");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_failed_rename_returns_io_error_and_removes_temp_file() {
        // Arrange: a non-empty directory sits where the document should go,
        // so the rename over it fails.
        let dir = temp_dir();
        let path = dir.join("config.json");
        fs::create_dir_all(path.join("occupied")).unwrap();

        // Act
        let result = FsDocumentStore::new().write_all_text(&path, "{}");

        // Assert
        assert!(matches!(result, Err(StoreError::Io { path: ref p, .. }) if p == &path));
        let leftovers: Vec<_> = fs::read_dir(&dir)
            .unwrap()
            .flatten()
            .filter(|entry| {
                entry
                    .file_name()
                    .to_string_lossy()
                    .starts_with(".config.json.tmp-")
            })
            .collect();
        assert!(leftovers.is_empty(), "temp file must be removed on failure");
        assert!(path.is_dir());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_sweeps_temp_files_left_by_a_crash() {
        // Arrange
        let dir = temp_dir();
        let path = dir.join("config.json");
        let stale = dir.join(".config.json.tmp-0000");
        fs::write(&stale, "half a docu").unwrap();
        let unrelated = dir.join(".other.json.tmp-0000");
        fs::write(&unrelated, "keep").unwrap();

        // Act
        FsDocumentStore::new().write_all_text(&path, "{}").expect("write");

        // Assert
        assert!(!stale.exists());
        assert!(unrelated.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_sweep_of_missing_directory_removes_nothing() {
        let base = temp_dir();
        let removed = sweep_stale_temps(&base.join("absent"), &temp_prefix("config.json"));
        assert_eq!(removed, 0);
        fs::remove_dir_all(&base).ok();
    }

    #[test]
    fn test_sync_dir_succeeds_for_existing_directory() {
        let dir = temp_dir();
        sync_dir(&dir).expect("sync");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_read_missing_file_returns_not_found() {
        let dir = temp_dir();
        let path = dir.join("absent.json");

        let err = FsDocumentStore::new().read_all_text(&path).unwrap_err();

        assert!(matches!(err, StoreError::NotFound(ref p) if p == &path));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_parent_dir_of_bare_file_name_is_current_dir() {
        assert_eq!(parent_dir(Path::new("config.json")), PathBuf::from("."));
        assert_eq!(parent_dir(Path::new("a/config.json")), PathBuf::from("a"));
    }
}
