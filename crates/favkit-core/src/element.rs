//! The capability bound for favorite elements.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Capabilities required of a favorite element.
///
/// An element is opaque to the rest of the system except for two things:
/// it can be compared for structural equality, and it can be encoded to and
/// decoded from bytes. Two elements that compare equal are the same favorite
/// regardless of anything else.
///
/// Blanket-implemented; never implement this by hand.
pub trait Element: Serialize + DeserializeOwned + PartialEq + Clone {}

impl<T> Element for T where T: Serialize + DeserializeOwned + PartialEq + Clone {}
