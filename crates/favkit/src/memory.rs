//! In-memory implementation of the Favorites trait.
//!
//! A contract-level double: no persistence, no codec, just the dedup and
//! ordering semantics. Useful for tests of code that consumes the trait.

use std::sync::RwLock;

use favkit_core::Element;

use crate::traits::Favorites;

/// In-memory favorites list.
///
/// All data is lost when the value is dropped. Thread-safe via RwLock.
pub struct MemoryFavorites<T> {
    elements: RwLock<Vec<T>>,
}

impl<T: Element> MemoryFavorites<T> {
    /// Create a new empty favorites list.
    pub fn new() -> Self {
        Self {
            elements: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Element> Default for MemoryFavorites<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Favorites<T> for MemoryFavorites<T> {
    fn save(&self, element: T) {
        let mut elements = self.elements.write().unwrap_or_else(|e| e.into_inner());
        if !elements.contains(&element) {
            elements.push(element);
        }
    }

    fn remove(&self, element: &T) {
        let mut elements = self.elements.write().unwrap_or_else(|e| e.into_inner());
        elements.retain(|e| e != element);
    }

    fn remove_all(&self) {
        let mut elements = self.elements.write().unwrap_or_else(|e| e.into_inner());
        elements.clear();
    }

    fn get_all(&self) -> Vec<T> {
        let elements = self.elements.read().unwrap_or_else(|e| e.into_inner());
        elements.clone()
    }

    fn is_favorite(&self, element: &T) -> bool {
        let elements = self.elements.read().unwrap_or_else(|e| e.into_inner());
        elements.contains(element)
    }
}
