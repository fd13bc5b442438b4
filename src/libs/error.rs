//! Typed error taxonomy for the storage layer.
//!
//! Store operations distinguish three failure classes: the backing
//! database cannot be opened or queried, a targeted row does not exist,
//! or the caller supplied data the validation policy rejects. Only the
//! storage failures should abort a calling flow; the other two are
//! recoverable and reported to the user.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The persistent store could not be opened, created or queried.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] rusqlite::Error),

    /// Filesystem-level failure while managing the store's files.
    #[error("storage unavailable: {0}")]
    StorageIo(#[from] std::io::Error),

    /// A lookup required a row that does not exist.
    #[error("no task with id {0}")]
    NotFound(i64),

    /// The supplied task violates the insert validation policy.
    #[error("{0}")]
    ValidationFailed(String),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        StoreError::ValidationFailed(msg.into())
    }
}
