//! Error types for the store backends.

use thiserror::Error;

/// Errors that can occur inside a key-value backend.
///
/// These stay below the favorites contract: the contract layer logs them
/// and degrades (a failed read becomes an empty list, a failed write is
/// dropped). They are typed so the backends themselves stay honest.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// I/O error from the file backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Blob-list framing could not be written.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// A lock guarding backend state was poisoned.
    #[error("store lock poisoned")]
    Poisoned,
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
