//! # Favkit
//!
//! Deduplicated, persisted favorites lists over a pluggable key-value store.
//!
//! ## Overview
//!
//! A favorites list is a small, ordered, duplicate-free list of elements of
//! one caller-defined type, persisted as a complete snapshot under a single
//! string key. Callers depend on the [`Favorites`] trait; the backing store
//! is chosen at construction time.
//!
//! ## Key Concepts
//!
//! - **Element**: any `Serialize + DeserializeOwned + PartialEq + Clone`
//!   type. Elements that compare equal are the same favorite.
//! - **Whole-list writes**: every mutation re-reads and re-writes the
//!   entire list. There is no delta update and no cache.
//! - **Silent degradation**: an element that fails to encode or decode
//!   disappears instead of raising an error; the five operations never
//!   fail.
//! - **Last writer wins**: the read-modify-write sequence is not atomic
//!   across concurrent callers; serialize externally if that matters.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use favkit::{Favorites, KvFavorites};
//! use favkit::store::MemoryKvStore;
//!
//! let store = Arc::new(MemoryKvStore::new());
//! let favorites: KvFavorites<String, _> = KvFavorites::new(store, "favs");
//!
//! favorites.save("Test".to_string());
//! assert!(favorites.is_favorite(&"Test".to_string()));
//! assert_eq!(favorites.get_all(), vec!["Test".to_string()]);
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `favkit::core` - Element capabilities and the per-element codec
//! - `favkit::store` - Key-value backends (memory, file, SQLite)

pub mod kv;
pub mod memory;
pub mod traits;

// Re-export component crates
pub use favkit_core as core;
pub use favkit_store as store;

// Re-export main types for convenience
pub use kv::KvFavorites;
pub use memory::MemoryFavorites;
pub use traits::Favorites;

// Re-export commonly used core types
pub use favkit_core::{BlobList, Element};
pub use favkit_store::KeyValueStore;
