//! Contract scenarios exercised against every shipped backend.
//!
//! Each backend gets the same battery: the list semantics must not depend
//! on which store sits underneath.

use std::sync::Arc;

use favkit::store::{FileKvStore, MemoryKvStore, SqliteKvStore};
use favkit::{Favorites, KeyValueStore, KvFavorites};

fn run_scenarios<S: KeyValueStore>(store: Arc<S>) {
    // save
    let favs: KvFavorites<String, S> = KvFavorites::new(Arc::clone(&store), "save");
    favs.save("Test".to_string());
    assert_eq!(favs.get_all(), vec!["Test".to_string()]);

    // save duplicate
    let favs: KvFavorites<String, S> = KvFavorites::new(Arc::clone(&store), "dup");
    favs.save("Test".to_string());
    favs.save("Test".to_string());
    assert_eq!(favs.get_all().len(), 1);

    // save then remove
    let favs: KvFavorites<String, S> = KvFavorites::new(Arc::clone(&store), "remove");
    favs.save("Test".to_string());
    favs.remove(&"Test".to_string());
    assert!(!favs.is_favorite(&"Test".to_string()));
    assert!(favs.get_all().is_empty());

    // save then remove_all
    let favs: KvFavorites<String, S> = KvFavorites::new(Arc::clone(&store), "clear");
    favs.save("Test".to_string());
    favs.remove_all();
    assert!(favs.get_all().is_empty());

    // order preserved
    let favs: KvFavorites<String, S> = KvFavorites::new(Arc::clone(&store), "order");
    favs.save("Test1".to_string());
    favs.save("Test2".to_string());
    assert_eq!(
        favs.get_all(),
        vec!["Test1".to_string(), "Test2".to_string()]
    );

    // fresh key
    let favs: KvFavorites<String, S> = KvFavorites::new(Arc::clone(&store), "fresh");
    assert!(!favs.is_favorite(&"Test".to_string()));
    assert!(favs.get_all().is_empty());
}

#[test]
fn scenarios_memory() {
    run_scenarios(Arc::new(MemoryKvStore::new()));
}

#[test]
fn scenarios_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileKvStore::open(dir.path().join("favs.db")).unwrap();
    run_scenarios(Arc::new(store));
}

#[test]
fn scenarios_sqlite() {
    run_scenarios(Arc::new(SqliteKvStore::open_memory().unwrap()));
}
