//! The persisted favorite set.
//!
//! Favorites are keyed by product display name - not a stable
//! identifier, so two products rendering the same name share one
//! favorite entry. Preserved behavior. The set is kept as an ordered
//! list so the persisted array round-trips deterministically.

use tracing::{debug, warn};

use crate::error::{Result, StoreError};
use crate::storage::{KeyValueStorage, StorageError};

/// The favorites store.
///
/// Same persistence contract as the cart: every mutation synchronously
/// rewrites the full set, writes fail soft, corrupt payloads
/// reinitialize empty with a diagnostic.
pub struct FavoriteStore<S> {
    storage: S,
    key: String,
    names: Vec<String>,
    last_write_error: Option<StorageError>,
}

impl<S: KeyValueStorage> FavoriteStore<S> {
    /// Open the favorite set stored under `key`, strictly.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CorruptState`] if a payload is present but
    /// does not parse; use [`FavoriteStore::open_lossy`] to recover with
    /// an empty set instead.
    pub fn open(storage: S, key: impl Into<String>) -> Result<Self> {
        let (store, diagnostic) = Self::open_lossy(storage, key);
        match diagnostic {
            Some(err) => Err(err),
            None => Ok(store),
        }
    }

    /// Open the favorite set stored under `key`, recovering from
    /// corruption with an empty set plus a diagnostic.
    pub fn open_lossy(storage: S, key: impl Into<String>) -> (Self, Option<StoreError>) {
        let key = key.into();
        let (names, diagnostic) = match storage.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(names) => (names, None),
                Err(e) => {
                    warn!(key = %key, error = %e, "discarding corrupt favorites payload");
                    (
                        Vec::new(),
                        Some(StoreError::CorruptState {
                            key: key.clone(),
                            reason: e.to_string(),
                        }),
                    )
                }
            },
            Ok(None) => (Vec::new(), None),
            Err(e) => {
                warn!(key = %key, error = %e, "storage unavailable, starting with empty favorites");
                (Vec::new(), None)
            }
        };

        (
            Self {
                storage,
                key,
                names,
                last_write_error: None,
            },
            diagnostic,
        )
    }

    /// Toggle `name` in the set and persist.
    ///
    /// Returns `true` when the toggle added the favorite, `false` when
    /// it removed one.
    pub fn toggle(&mut self, name: &str) -> bool {
        let added = if let Some(pos) = self.names.iter().position(|n| n == name) {
            self.names.remove(pos);
            false
        } else {
            self.names.push(name.to_owned());
            true
        };
        debug!(name = %name, added, "favorite toggled");
        self.persist();
        added
    }

    /// Whether `name` is currently a favorite.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// The favorite names, in insertion order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of favorites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The error from the most recent persistence attempt, if it failed.
    #[must_use]
    pub const fn last_write_error(&self) -> Option<&StorageError> {
        self.last_write_error.as_ref()
    }

    fn persist(&mut self) {
        let raw = match serde_json::to_string(&self.names) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = %self.key, error = %e, "favorites serialization failed, skipping write");
                self.last_write_error = Some(StorageError::Unavailable {
                    reason: e.to_string(),
                });
                return;
            }
        };
        match self.storage.set(&self.key, &raw) {
            Ok(()) => self.last_write_error = None,
            Err(e) => {
                warn!(key = %self.key, error = %e, "favorites write failed, continuing in memory");
                self.last_write_error = Some(e);
            }
        }
    }
}
