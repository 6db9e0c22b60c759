//! End-to-end persistence: favorites written through one handle must be
//! observable through a fresh handle over a reopened backend.

use std::sync::Arc;

use favkit::{Favorites, KvFavorites};
use favkit_store::{FileKvStore, SqliteKvStore};
use favkit_testkit::{Bookmark, NeverEncodes, TestFixture};

fn sample_bookmarks() -> Vec<Bookmark> {
    vec![
        Bookmark::new("https://one.example", "One"),
        Bookmark::new("https://two.example", "Two"),
    ]
}

#[test]
fn file_backend_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites.db");
    let saved = sample_bookmarks();

    {
        let store = Arc::new(FileKvStore::open(&path).unwrap());
        let favs: KvFavorites<Bookmark, _> = KvFavorites::new(store, "bookmarks");
        for b in &saved {
            favs.save(b.clone());
        }
    }

    let store = Arc::new(FileKvStore::open(&path).unwrap());
    let favs: KvFavorites<Bookmark, _> = KvFavorites::new(store, "bookmarks");
    assert_eq!(favs.get_all(), saved);
    assert!(favs.is_favorite(&saved[0]));
}

#[test]
fn sqlite_backend_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites.sqlite");
    let saved = sample_bookmarks();

    {
        let store = Arc::new(SqliteKvStore::open(&path).unwrap());
        let favs: KvFavorites<Bookmark, _> = KvFavorites::new(store, "bookmarks");
        for b in &saved {
            favs.save(b.clone());
        }
    }

    let store = Arc::new(SqliteKvStore::open(&path).unwrap());
    let favs: KvFavorites<Bookmark, _> = KvFavorites::new(store, "bookmarks");
    assert_eq!(favs.get_all(), saved);
}

#[test]
fn removal_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites.db");
    let saved = sample_bookmarks();

    {
        let store = Arc::new(FileKvStore::open(&path).unwrap());
        let favs: KvFavorites<Bookmark, _> = KvFavorites::new(store, "bookmarks");
        for b in &saved {
            favs.save(b.clone());
        }
        favs.remove(&saved[0]);
    }

    let store = Arc::new(FileKvStore::open(&path).unwrap());
    let favs: KvFavorites<Bookmark, _> = KvFavorites::new(store, "bookmarks");
    assert_eq!(favs.get_all(), vec![saved[1].clone()]);
}

#[test]
fn unencodable_element_is_dropped_from_snapshot() {
    let fixture = TestFixture::new();
    let favs = fixture.favorites::<NeverEncodes>("bricks");

    favs.save(NeverEncodes);

    // The write happened (an empty snapshot), but the element is not in it.
    assert!(favs.get_all().is_empty());
    assert!(!favs.is_favorite(&NeverEncodes));
    assert_eq!(fixture.sync_requests(), 1);
}

#[test]
fn lists_under_different_keys_do_not_mix() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(SqliteKvStore::open(dir.path().join("kv.sqlite")).unwrap());

    let songs: KvFavorites<String, _> = KvFavorites::new(Arc::clone(&store), "songs");
    let films: KvFavorites<String, _> = KvFavorites::new(Arc::clone(&store), "films");

    songs.save("Song".to_string());
    films.save("Film".to_string());

    assert_eq!(songs.get_all(), vec!["Song".to_string()]);
    assert_eq!(films.get_all(), vec!["Film".to_string()]);

    songs.remove_all();
    assert!(songs.get_all().is_empty());
    assert_eq!(films.get_all(), vec!["Film".to_string()]);
}
