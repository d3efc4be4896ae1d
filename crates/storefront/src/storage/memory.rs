//! In-memory storage backend.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::{KeyValueStorage, StorageError};

/// A `HashMap`-backed storage backend.
///
/// Clones share the same underlying map, the way every script on a page
/// shares one `localStorage`. Handy default for tests and for sessions
/// where durability is disabled.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    available: Rc<Cell<bool>>,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    /// Create an empty, available backend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Rc::default(),
            available: Rc::new(Cell::new(true)),
        }
    }

    /// Flip availability, simulating storage being disabled or full.
    ///
    /// Affects every clone of this backend.
    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.available.get() {
            Ok(())
        } else {
            Err(StorageError::Unavailable {
                reason: "storage disabled".to_owned(),
            })
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_available()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_available()?;
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
