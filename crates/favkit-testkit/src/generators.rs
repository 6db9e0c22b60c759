//! Proptest generators for property-based testing.

use proptest::prelude::*;

use crate::fixtures::Bookmark;

/// Generate a storage key.
pub fn storage_key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,31}".prop_map(String::from)
}

/// Generate a string element.
pub fn element() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,32}".prop_map(String::from)
}

/// Generate a bookmark element.
pub fn bookmark() -> impl Strategy<Value = Bookmark> {
    ("[a-z]{1,12}", "[A-Za-z0-9 ]{0,24}").prop_map(|(slug, title)| {
        Bookmark::new(format!("https://{}.example", slug), title)
    })
}

/// Generate a list of bookmarks, duplicates allowed.
pub fn bookmarks(max_len: usize) -> impl Strategy<Value = Vec<Bookmark>> {
    prop::collection::vec(bookmark(), 0..=max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn bookmark_urls_are_nonempty(b in bookmark()) {
            prop_assert!(b.url.starts_with("https://"));
        }

        #[test]
        fn storage_keys_are_nonempty(key in storage_key()) {
            prop_assert!(!key.is_empty());
        }
    }
}
