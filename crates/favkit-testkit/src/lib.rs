//! # Favkit Testkit
//!
//! Testing utilities for favkit.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: a wired-up memory store with typed favorites handles,
//!   raw-blob seeding for corruption tests, and sample element types
//!   (including one that refuses to encode)
//! - **Generators**: proptest strategies for elements and storage keys
//!
//! The favorites-contract property suite and the backend persistence
//! round-trips live under `tests/`.
//!
//! ## Usage
//!
//! ```rust
//! use favkit::Favorites;
//! use favkit_testkit::fixtures::{Bookmark, TestFixture};
//!
//! let fixture = TestFixture::new();
//! let favorites = fixture.favorites::<Bookmark>("bookmarks");
//!
//! favorites.save(Bookmark::new("https://example.com", "Example"));
//! assert_eq!(favorites.get_all().len(), 1);
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{Bookmark, NeverEncodes, TestFixture};
