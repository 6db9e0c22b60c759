//! Single-file implementation of the KeyValueStore trait.
//!
//! The whole store is one CBOR map of key to blob list, rewritten
//! atomically (temp file + rename) on every set. Pointing the path into a
//! platform-synchronized directory is what makes the store travel between
//! devices; this backend itself knows nothing about replication.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use favkit_core::BlobList;

use crate::error::{Result, StoreError};
use crate::traits::KeyValueStore;

/// File-backed key-value store.
///
/// Reads are served from an in-memory copy loaded at open; writes go
/// through to disk before returning. A file that exists but does not parse
/// as a key map is treated as empty rather than an error.
pub struct FileKvStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, BlobList>>,
}

impl FileKvStore {
    /// Open a store at the given path, creating it lazily on first write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read(&path) {
            Ok(bytes) => match ciborium::from_reader(bytes.as_slice()) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("ignoring unreadable store file {:?}: {}", path, e);
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(StoreError::Io(e)),
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Path this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the full map to disk via a temp file and rename.
    fn persist(&self, entries: &HashMap<String, BlobList>) -> Result<()> {
        let mut buf = Vec::new();
        ciborium::into_writer(entries, &mut buf)
            .map_err(|e| StoreError::Encoding(e.to_string()))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &buf)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<BlobList>> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, blobs: BlobList) -> Result<()> {
        // Hold the write lock across the disk write so concurrent sets
        // cannot interleave a stale snapshot over a fresh one.
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), blobs);
        self.persist(&entries)
    }

    fn request_sync(&self) {
        // Data already hit the file on set; flushing it through the OS is
        // all that is left to ask for.
        match fs::OpenOptions::new().write(true).open(&self.path) {
            Ok(file) => {
                if let Err(e) = file.sync_all() {
                    tracing::debug!("sync hint ignored for {:?}: {}", self.path, e);
                }
            }
            Err(_) => {
                // Nothing written yet, nothing to flush.
            }
        }
    }
}
