//! File-backed storage backend.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::{KeyValueStorage, StorageError};

/// A storage backend persisting all keys into one JSON object file.
///
/// Each `set` rewrites the whole file, mirroring the synchronous
/// write-everything behavior the stores were built around. The handle is
/// stateless; clones over the same path see each other's writes through
/// the filesystem, last write wins.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a backend over `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(StorageError::Unavailable {
                    reason: format!("read {}: {e}", self.path.display()),
                });
            }
        };

        serde_json::from_str(&raw).map_err(|e| {
            // The whole backing file being unreadable is a backend
            // failure, distinct from a single corrupt value.
            warn!(path = %self.path.display(), error = %e, "storage file is not a JSON object");
            StorageError::Unavailable {
                reason: format!("parse {}: {e}", self.path.display()),
            }
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let raw = serde_json::to_string(entries).map_err(|e| StorageError::Unavailable {
            reason: format!("serialize storage: {e}"),
        })?;
        std::fs::write(&self.path, raw).map_err(|e| StorageError::Unavailable {
            reason: format!("write {}: {e}", self.path.display()),
        })
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_owned(), value.to_owned());
        self.write_entries(&entries)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("store.json"));
        assert_eq!(storage.get("cart").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_across_handles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut writer = JsonFileStorage::new(&path);
        writer.set("cart", "[]").unwrap();
        writer.set("favorites", "[\"Tee A\"]").unwrap();

        let reader = JsonFileStorage::new(&path);
        assert_eq!(reader.get("cart").unwrap().as_deref(), Some("[]"));
        assert_eq!(
            reader.get("favorites").unwrap().as_deref(),
            Some("[\"Tee A\"]")
        );
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonFileStorage::new(dir.path().join("store.json"));
        storage.set("cart", "[]").unwrap();
        storage.set("cart", "[{\"id\":1}]").unwrap();
        assert_eq!(
            storage.get("cart").unwrap().as_deref(),
            Some("[{\"id\":1}]")
        );
    }

    #[test]
    fn test_mangled_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json at all").unwrap();

        let storage = JsonFileStorage::new(&path);
        assert!(matches!(
            storage.get("cart"),
            Err(StorageError::Unavailable { .. })
        ));
    }

    #[test]
    fn test_unwritable_path_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonFileStorage::new(dir.path().join("no-such-dir").join("store.json"));
        assert!(matches!(
            storage.set("cart", "[]"),
            Err(StorageError::Unavailable { .. })
        ));
    }
}
