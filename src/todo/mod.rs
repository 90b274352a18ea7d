//! To-do domain model and state transitions
//!
//! This module contains the core to-do data structures and the reducer.
//! It is split into submodules:
//! - `item`: the `Item` value type
//! - `state`: `TodoState`, the ordered item collection
//! - `queries`: read-only helpers on `TodoState`
//! - `action`: the closed set of actions accepted by the reducer
//! - `reducer`: the pure state-transition function
//! - `id`: id generators used by `Action::Add`
//! - `serde_impl`: serialization/deserialization of `TodoState`

mod action;
mod id;
mod item;
mod queries;
mod reducer;
mod serde_impl;
mod state;

// Re-export all public types
pub use action::{Action, NewItem};
pub use id::{IdGenerator, SequentialIdGenerator, TimestampIdGenerator};
pub use item::Item;
pub use reducer::reduce;
pub use state::TodoState;
