//! Test fixtures: a wired-up store plus sample element types.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use favkit::KvFavorites;
use favkit_core::{BlobList, Element};
use favkit_store::{KeyValueStore, MemoryKvStore};

/// A sample element type with more than one field, so equality is
/// structural rather than string identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub url: String,
    pub title: String,
}

impl Bookmark {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// An element whose encoding and decoding always fail.
///
/// Saving one exercises the drop-on-encode path: the persisted snapshot
/// simply never contains it.
#[derive(Debug, Clone, PartialEq)]
pub struct NeverEncodes;

impl Serialize for NeverEncodes {
    fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
        use serde::ser::Error;
        Err(S::Error::custom("never encodes"))
    }
}

impl<'de> Deserialize<'de> for NeverEncodes {
    fn deserialize<D: serde::Deserializer<'de>>(_: D) -> Result<Self, D::Error> {
        use serde::de::Error;
        Err(D::Error::custom("never decodes"))
    }
}

/// A memory-backed store with typed favorites handles on demand.
pub struct TestFixture {
    store: Arc<MemoryKvStore>,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemoryKvStore::new()),
        }
    }

    /// The shared backing store.
    pub fn store(&self) -> &Arc<MemoryKvStore> {
        &self.store
    }

    /// A favorites handle over the shared store, scoped to `key`.
    pub fn favorites<T: Element>(&self, key: &str) -> KvFavorites<T, MemoryKvStore> {
        KvFavorites::new(Arc::clone(&self.store), key)
    }

    /// Plant raw blobs at a key, bypassing the codec.
    ///
    /// For corruption tests: the blobs need not decode as anything.
    pub fn seed_raw(&self, key: &str, blobs: BlobList) {
        self.store
            .set(key, blobs)
            .expect("memory store never fails");
    }

    /// Number of sync hints the store has received.
    pub fn sync_requests(&self) -> u64 {
        self.store.sync_requests()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use favkit::Favorites;

    #[test]
    fn test_fixture_handles_share_the_store() {
        let fixture = TestFixture::new();
        let a = fixture.favorites::<String>("favs");
        let b = fixture.favorites::<String>("favs");

        a.save("Test".to_string());
        assert!(b.is_favorite(&"Test".to_string()));
    }

    #[test]
    fn test_seed_raw_bypasses_codec() {
        let fixture = TestFixture::new();
        fixture.seed_raw("favs", vec![Bytes::from_static(b"gibberish")]);

        let favs = fixture.favorites::<String>("favs");
        assert!(favs.get_all().is_empty());
    }
}
