//! File-backed persistence across store instances
mod common;

use std::fs;
use todo_store::*;

#[test]
fn test_state_survives_reopen() {
    let (mut store, temp_dir) = common::get_file_store();
    let milk = store.add("Buy milk", None).unwrap();
    store.add("Walk dog", Some("around the park".to_string())).unwrap();
    store.dispatch(Action::toggle_done(&milk)).unwrap();
    let saved = store.state().clone();
    drop(store);

    let reopened = common::reopen_file_store(&temp_dir);
    assert_eq!(reopened.state(), &saved);
    assert!(reopened.state().find(&milk).unwrap().done);
}

#[test]
fn test_carriage_returns_survive_reopen() {
    let (mut store, temp_dir) = common::get_file_store();
    let id = store
        .add("Buy\rmilk", Some("one\r\ntwo".to_string()))
        .unwrap();
    let other = store.add("Walk dog", None).unwrap();
    store
        .dispatch(Action::edit(&other, "Walk\r\ndog", Some("park\rlake".to_string())))
        .unwrap();
    let saved = store.state().clone();
    drop(store);

    let reopened = common::reopen_file_store(&temp_dir);
    assert_eq!(reopened.state(), &saved);

    let item = reopened.state().find(&id).unwrap();
    assert_eq!(item.title, "Buy\nmilk");
    assert_eq!(item.details.as_deref(), Some("one\ntwo"));
    assert_eq!(reopened.state().find(&other).unwrap().title, "Walk\ndog");
}

#[test]
fn test_order_survives_reopen() {
    let (mut store, temp_dir) = common::get_file_store();
    for title in ["one", "two", "three"] {
        store.add(title, None).unwrap();
    }
    store.dispatch(Action::Move { from: 0, to: 2 }).unwrap();
    let order = common::ids(&store);
    drop(store);

    let reopened = common::reopen_file_store(&temp_dir);
    assert_eq!(common::ids(&reopened), order);
}

#[test]
fn test_persisted_file_layout() {
    let (mut store, temp_dir) = common::get_file_store();
    let id = store.add("Buy milk", None).unwrap();

    let path = temp_dir.path().join("todoListState.json");
    let content = fs::read_to_string(path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], id.as_str());
    assert_eq!(items[0]["title"], "Buy milk");
    assert_eq!(items[0]["done"], false);
    assert!(items[0].get("details").is_none());
}

#[test]
fn test_malformed_file_starts_empty() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    fs::write(temp_dir.path().join("todoListState.json"), "{\"items\": [").unwrap();

    let mut store = Store::new(FileStorage::new(temp_dir.path()));
    assert!(!store.hydrate());
    assert!(store.state().is_empty());

    // The next change overwrites the broken blob
    store.add("Fresh start", None).unwrap();
    let reopened = common::reopen_file_store(&temp_dir);
    assert_eq!(reopened.items().len(), 1);
}

#[test]
fn test_legacy_field_name_is_loaded() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("todoListState.json"),
        r#"{"todoItems":[{"id":"lx1-abc","title":"Old format","done":true}]}"#,
    )
    .unwrap();

    let store = common::reopen_file_store(&temp_dir);
    assert_eq!(store.items().len(), 1);
    assert!(store.items()[0].done);
}

#[test]
fn test_custom_storage_key() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let mut store = Store::with_key(FileStorage::new(temp_dir.path()), "work");
    store.add("Write report", None).unwrap();

    assert!(temp_dir.path().join("work.json").exists());
    assert!(!temp_dir.path().join("todoListState.json").exists());

    let mut other = Store::with_key(FileStorage::new(temp_dir.path()), "work");
    assert!(other.hydrate());
    assert_eq!(other.items()[0].title, "Write report");
}

#[test]
fn test_escaping_storage_key_is_rejected() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let inner = temp_dir.path().join("data");
    let mut store = Store::with_key(FileStorage::new(&inner), "../outside");

    assert!(!store.hydrate());
    let err = store.dispatch(Action::add("Buy milk", None)).unwrap_err();
    assert!(matches!(err, StoreError::InvalidKey { .. }));
    assert!(!temp_dir.path().join("outside.json").exists());
    assert!(!inner.exists());
}
