//! In-memory implementation of the KeyValueStore trait.
//!
//! This is primarily for testing. It has the same semantics as the
//! persistent backends but keeps everything in memory, and it counts sync
//! requests so tests can observe the hint being issued.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use favkit_core::BlobList;

use crate::error::{Result, StoreError};
use crate::traits::KeyValueStore;

/// In-memory key-value store.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock, so
/// one instance can back several favorites handles at once.
pub struct MemoryKvStore {
    entries: RwLock<HashMap<String, BlobList>>,
    sync_requests: AtomicU64,
}

impl MemoryKvStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            sync_requests: AtomicU64::new(0),
        }
    }

    /// Number of times `request_sync` has been called.
    pub fn sync_requests(&self) -> u64 {
        self.sync_requests.load(Ordering::Relaxed)
    }
}

impl Default for MemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<BlobList>> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, blobs: BlobList) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), blobs);
        Ok(())
    }

    fn request_sync(&self) {
        self.sync_requests.fetch_add(1, Ordering::Relaxed);
    }
}
