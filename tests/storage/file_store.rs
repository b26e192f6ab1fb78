//! Progress and bookmarks persisted through the file-backed store.

use polyportal::storage::{BOOKMARKS_KEY, PROGRESS_KEY};
use polyportal::{
    BookmarkItem, BookmarkKind, FileStore, PersistedState, PersistedStore, StorageError,
};
use std::fs;

fn store() -> (tempfile::TempDir, FileStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = FileStore::open(dir.path().join("state")).expect("Failed to open store");
    (dir, store)
}

#[test]
fn test_save_then_load_in_a_new_session() {
    let (_dir, mut store) = store();
    let mut state = PersistedState::default();
    state.progress.set("ce_1002", 40);
    state.progress.set("ce_3001", 100);
    state.bookmarks.add(
        BookmarkItem::new("ce_1002", BookmarkKind::Subject, "Mathematics I").in_department("ce"),
    );
    state.save(&mut store).unwrap();

    let reopened = FileStore::open(store.dir()).unwrap();
    assert_eq!(PersistedState::load(&reopened), state);
}

#[test]
fn test_files_hold_plain_json() {
    let (_dir, mut store) = store();
    let mut state = PersistedState::default();
    state.progress.set("me_3001", 75);
    state.save_progress(&mut store).unwrap();

    let raw = fs::read_to_string(store.dir().join("progress.json")).unwrap();
    assert_eq!(raw, r#"{"me_3001":75}"#);
    assert!(!store.dir().join("progress.json.tmp").exists());
}

#[test]
fn test_missing_store_loads_empty() {
    let (_dir, store) = store();
    let state = PersistedState::load(&store);
    assert!(state.progress.is_empty());
    assert!(state.bookmarks.is_empty());
}

#[test]
fn test_corrupt_files_load_empty() {
    let (_dir, mut store) = store();
    store.write(PROGRESS_KEY, "{not json").unwrap();
    store.write(BOOKMARKS_KEY, r#"{"a": 1}"#).unwrap();
    let state = PersistedState::load(&store);
    assert!(state.progress.is_empty());
    assert!(state.bookmarks.is_empty());
}

#[test]
fn test_partially_valid_payloads_keep_good_entries() {
    let (_dir, mut store) = store();
    store
        .write(PROGRESS_KEY, r#"{"ce_1002": 33.6, "ce_3001": "half", "me_1001": 250}"#)
        .unwrap();
    store
        .write(
            BOOKMARKS_KEY,
            r#"[{"id": "ce", "type": "dept", "title": "Computer Engineering"},
                {"id": 5},
                {"id": "ce", "type": "dept", "title": "duplicate"}]"#,
        )
        .unwrap();

    let state = PersistedState::load(&store);
    assert_eq!(state.progress.get("ce_1002"), Some(34));
    assert_eq!(state.progress.get("ce_3001"), None);
    assert_eq!(state.progress.get("me_1001"), Some(100));
    assert_eq!(state.bookmarks.len(), 1);
    assert_eq!(state.bookmarks.items()[0].title, "Computer Engineering");
}

#[test]
fn test_path_like_keys_are_rejected() {
    let (_dir, mut store) = store();
    for key in ["../escape", "a/b", "", "progress.json"] {
        assert!(matches!(
            store.write(key, "{}"),
            Err(StorageError::InvalidKey(_))
        ));
        assert_eq!(store.read(key), None);
    }
}
