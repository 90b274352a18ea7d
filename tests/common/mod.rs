//! Common test utilities for integration tests

#![allow(dead_code)]

use tempfile::TempDir;
use todo_store::{FileStorage, MemoryStorage, SequentialIdGenerator, Store};

/// Create an in-memory store with deterministic ids (`#1`, `#2`, ...)
pub fn get_memory_store() -> Store<MemoryStorage> {
    Store::new(MemoryStorage::new()).with_id_generator(SequentialIdGenerator::new())
}

/// Create a file-backed store in a temporary directory
///
/// The directory lives as long as the returned `TempDir`.
pub fn get_file_store() -> (Store<FileStorage>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = Store::new(FileStorage::new(temp_dir.path()));
    (store, temp_dir)
}

/// Open a fresh, hydrated store over an existing directory
pub fn reopen_file_store(temp_dir: &TempDir) -> Store<FileStorage> {
    let mut store = Store::new(FileStorage::new(temp_dir.path()));
    store.hydrate();
    store
}

/// Ids of the store's items in order
pub fn ids<S: todo_store::KeyValueStorage>(store: &Store<S>) -> Vec<String> {
    store.items().iter().map(|item| item.id.clone()).collect()
}
