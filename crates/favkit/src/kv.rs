//! Key-value backed implementation of the Favorites trait.
//!
//! Every operation is a fresh round trip: read the whole list, apply the
//! change, write the whole list back. There is no caching between calls and
//! no locking around the read-modify-write sequence; two concurrent saves
//! on one key may lose one of them (last writer wins). Callers that need
//! atomicity serialize access themselves.

use std::marker::PhantomData;
use std::sync::Arc;

use favkit_core::{decode_best_effort, encode_best_effort, Element};
use favkit_store::KeyValueStore;

use crate::traits::Favorites;

/// Favorites list persisted under one key of a key-value store.
///
/// Instances with different keys are fully independent; instances sharing a
/// key (and a store handle) observe and mutate the same underlying data.
pub struct KvFavorites<T, S> {
    store: Arc<S>,
    key: String,
    _element: PhantomData<fn() -> T>,
}

impl<T: Element, S: KeyValueStore> KvFavorites<T, S> {
    /// Create a favorites list over `store`, scoped to `key`.
    pub fn new(store: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            _element: PhantomData,
        }
    }

    /// The storage key this list is scoped to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying store handle.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read path: fetch the blob list and decode what survives.
    ///
    /// An absent key, a shape mismatch, or a backend failure all read as an
    /// empty list; individually undecodable blobs are dropped.
    fn load(&self) -> Vec<T> {
        let blobs = match self.store.get(&self.key) {
            Ok(Some(blobs)) => blobs,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("favorites read failed for key {:?}: {}", self.key, e);
                return Vec::new();
            }
        };

        decode_best_effort(&blobs)
    }

    /// Write path: encode what survives, store the complete snapshot, then
    /// hint the backend to propagate.
    ///
    /// A backend write failure is logged and swallowed; the contract stays
    /// infallible.
    fn persist(&self, elements: &[T]) {
        let blobs = encode_best_effort(elements);

        if let Err(e) = self.store.set(&self.key, blobs) {
            tracing::warn!("favorites write failed for key {:?}: {}", self.key, e);
            return;
        }

        self.store.request_sync();
    }
}

impl<T: Element, S: KeyValueStore> Favorites<T> for KvFavorites<T, S> {
    fn save(&self, element: T) {
        let mut current = self.load();
        if !current.contains(&element) {
            current.push(element);
            self.persist(&current);
        }
    }

    fn remove(&self, element: &T) {
        let mut current = self.load();
        current.retain(|e| e != element);
        self.persist(&current);
    }

    fn remove_all(&self) {
        // No read needed: the empty snapshot replaces whatever is there.
        self.persist(&[]);
    }

    fn get_all(&self) -> Vec<T> {
        self.load()
    }

    fn is_favorite(&self, element: &T) -> bool {
        self.load().iter().any(|e| e == element)
    }
}
