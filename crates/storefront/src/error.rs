//! Store-level error handling.
//!
//! Every error here is recoverable: the page keeps working on in-memory
//! state. Handlers log, surface a diagnostic where one is useful, and
//! move on.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by the cart and favorites stores.
#[derive(Debug, Error, Clone)]
pub enum StoreError {
    /// The storage backend failed; in-memory state is still authoritative.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A persisted payload did not parse as the expected shape. The
    /// payload is discarded and the collection reinitialized empty.
    #[error("corrupt state under {key:?}: {reason}")]
    CorruptState {
        /// Storage key whose payload was corrupt.
        key: String,
        /// Parser diagnostic for logs.
        reason: String,
    },
}

/// Result type alias for [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
