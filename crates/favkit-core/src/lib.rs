//! # Favkit Core
//!
//! Pure primitives for favkit: element capabilities and the per-element codec.
//!
//! This crate contains no I/O and no storage. It defines what a favorite
//! element must be able to do, and how a list of elements becomes (and is
//! recovered from) an ordered sequence of independently encoded blobs.
//!
//! ## Key Types
//!
//! - [`Element`] - Capability bound for favorite elements
//! - [`BlobList`] - The persisted shape: one encoded blob per element
//! - [`CodecError`] - Per-element encode/decode failure
//!
//! ## Encoding
//!
//! Each element is encoded to its own JSON blob. The surrounding sequence is
//! never one document, so a corrupt entry can only take itself down. See the
//! [`codec`] module for the best-effort batch helpers.

pub mod codec;
pub mod element;
pub mod error;

pub use codec::{
    decode_best_effort, decode_element, encode_best_effort, encode_element, BlobList,
};
pub use element::Element;
pub use error::CodecError;
