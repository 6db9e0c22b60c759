//! Per-element JSON codec and the best-effort batch helpers.
//!
//! Every element is encoded independently into its own blob. The batch
//! helpers implement the silent-drop policy: a blob that fails to decode
//! (or an element that fails to encode) is skipped, never fatal. That
//! policy is deliberate and lives only here, so it stays auditable.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CodecError, Result};

/// The persisted shape of a favorites list: one encoded blob per element,
/// order preserved.
pub type BlobList = Vec<Bytes>;

/// Encode a single element to its JSON blob.
pub fn encode_element<T: Serialize>(element: &T) -> Result<Bytes> {
    serde_json::to_vec(element)
        .map(Bytes::from)
        .map_err(CodecError::Encode)
}

/// Decode a single blob back into an element.
pub fn decode_element<T: DeserializeOwned>(blob: &[u8]) -> Result<T> {
    serde_json::from_slice(blob).map_err(CodecError::Decode)
}

/// Encode each element independently, dropping any that fail.
///
/// The returned list preserves the order of the surviving elements. A
/// dropped element simply does not appear in the persisted snapshot.
pub fn encode_best_effort<T: Serialize>(elements: &[T]) -> BlobList {
    elements
        .iter()
        .filter_map(|element| match encode_element(element) {
            Ok(blob) => Some(blob),
            Err(e) => {
                tracing::warn!("dropping unencodable element: {}", e);
                None
            }
        })
        .collect()
}

/// Decode each blob independently, dropping any that fail.
///
/// A blob that does not decode disappears from the result as if it had
/// never been saved.
pub fn decode_best_effort<T: DeserializeOwned>(blobs: &[Bytes]) -> Vec<T> {
    blobs
        .iter()
        .filter_map(|blob| match decode_element(blob) {
            Ok(element) => Some(element),
            Err(e) => {
                tracing::warn!("dropping undecodable blob: {}", e);
                None
            }
        })
        .collect()
}
