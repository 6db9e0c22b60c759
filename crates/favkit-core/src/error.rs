//! Error types for the per-element codec.

use thiserror::Error;

/// Errors that can occur encoding or decoding a single element.
///
/// These never cross the favorites contract: batch operations drop the
/// failing element and carry on. The type exists so that the single-element
/// entry points stay honestly fallible.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The element could not be encoded to JSON.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// The blob could not be decoded back into an element.
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
