//! The persistent key-value capability.
//!
//! The stores treat durable storage the way the page treated
//! `localStorage`: a string-to-string map with `get`/`set`, no
//! transactions, no size guarantees, possibly unavailable altogether.
//! Backends implement [`KeyValueStorage`]; the stores never know which one
//! they are writing to.
//!
//! Two open tabs over the same backend race with last-write-wins
//! semantics. That is accepted, not coordinated around.

mod file;
mod memory;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

/// Errors a storage backend can report.
///
/// All of them are recoverable: callers log and continue with in-memory
/// state.
#[derive(thiserror::Error, Debug, Clone)]
pub enum StorageError {
    /// The backend cannot be read or written (disabled, I/O failure).
    #[error("storage unavailable: {reason}")]
    Unavailable {
        /// Backend-specific description of the failure.
        reason: String,
    },
    /// A write was rejected for size.
    #[error("storage quota exceeded writing {key:?}")]
    QuotaExceeded {
        /// The key whose write was rejected.
        key: String,
    },
}

/// A string-keyed, string-valued persistence capability.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] or
    /// [`StorageError::QuotaExceeded`] if the write does not take.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
