//! To-do Store Library
//!
//! This library provides the state core of a to-do list: an ordered item
//! collection, a pure reducer over a closed set of actions, and write-through
//! persistence of the whole state to a key-value storage medium.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Domain Layer**: `todo` module - items, actions, and the reducer
//! - **Dispatch Layer**: `Store` - owns the state, validates and applies
//!   actions, notifies observers
//! - **Persistence Layer**: `persistence` and `storage` modules - JSON blob
//!   under a fixed key, stored in memory or in a directory of files
//!
//! # Example
//!
//! ```no_run
//! use todo_store::{Action, FileStorage, Store};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut store = Store::new(FileStorage::new("."));
//!     store.hydrate();
//!     store.subscribe(|state| println!("{} item(s)", state.len()));
//!
//!     let id = store.add("Buy milk", None)?;
//!     store.dispatch(Action::toggle_done(id))?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod formatting;
pub mod persistence;
pub mod storage;
pub mod store;
pub mod todo;
pub mod validation;

// Re-export commonly used types
pub use error::StoreError;
pub use persistence::{DEFAULT_STORAGE_KEY, PersistenceAdapter};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{Store, SubscriptionId};
pub use todo::{
    Action, IdGenerator, Item, NewItem, SequentialIdGenerator, TimestampIdGenerator, TodoState,
    reduce,
};
