//! Favorites trait: the capability contract any favorites backend fulfills.

use favkit_core::Element;

/// The favorites contract: a deduplicated, ordered list of elements.
///
/// Implementations are free to choose any backing medium (in-memory, file,
/// cloud key-value, database) as long as the per-operation guarantees hold.
/// None of the operations can fail from the caller's point of view: storage
/// trouble degrades to "was never saved" rather than an error.
pub trait Favorites<T: Element> {
    /// Add an element to the favorites.
    ///
    /// Afterwards `is_favorite` returns true and the element appears at
    /// most once in `get_all`. Saving an element that is already present
    /// is a no-op.
    fn save(&self, element: T);

    /// Remove every entry comparing equal to `element`. No-op if absent.
    fn remove(&self, element: &T);

    /// Remove all elements from the favorites.
    fn remove_all(&self);

    /// All favorite elements in insertion order.
    ///
    /// Returns a snapshot copy; mutating it does not affect stored state.
    /// Empty or corrupt storage yields an empty list, never an error.
    fn get_all(&self) -> Vec<T>;

    /// Whether any stored entry compares equal to `element`.
    fn is_favorite(&self, element: &T) -> bool;
}
