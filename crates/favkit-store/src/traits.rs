//! KeyValueStore trait: the abstract interface the favorites list persists
//! through.
//!
//! This trait covers exactly the capability set the favorites layer
//! consumes: look up a blob list by key, replace a blob list wholesale, and
//! hint that now would be a good time to propagate. Implementations include
//! in-memory (primary test double), a single-file store, and SQLite.

use favkit_core::BlobList;

use crate::error::Result;

/// The key-value store trait: string keys, blob-list values.
///
/// Values are always complete snapshots; there is no partial update. A
/// stored value that exists but is not a decodable blob list must be
/// reported as `Ok(None)`, indistinguishable from an absent key.
///
/// # Design Notes
///
/// - **Whole-value writes**: `set` replaces everything at the key.
/// - **Shape mismatch is absence**: corrupt framing never surfaces as an
///   error, only as a missing value.
/// - **Sync is a hint**: `request_sync` is fire-and-forget; backends are
///   free to ignore or defer it, and callers get no completion signal.
pub trait KeyValueStore: Send + Sync {
    /// Look up the blob list stored at `key`.
    ///
    /// Returns `Ok(None)` when the key is absent or the stored value does
    /// not have the expected blob-list shape.
    fn get(&self, key: &str) -> Result<Option<BlobList>>;

    /// Replace the blob list stored at `key` with a complete snapshot.
    fn set(&self, key: &str, blobs: BlobList) -> Result<()>;

    /// Ask the backend to propagate pending writes, best-effort.
    ///
    /// Never blocks on propagation and never reports failure.
    fn request_sync(&self);
}
