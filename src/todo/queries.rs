//! Query methods for TodoState
//!
//! Read-only lookups and counters used by observers and the CLI.

use super::item::Item;
use super::state::TodoState;

impl TodoState {
    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there are no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if an item with the given id exists
    pub fn contains(&self, id: &str) -> bool {
        self.id_index.contains(id)
    }

    /// Find an item by its id
    pub fn find(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Current position of an item in the ordered list
    pub fn position(&self, id: &str) -> Option<usize> {
        if !self.contains(id) {
            return None;
        }
        self.items.iter().position(|item| item.id == id)
    }

    /// Iterate over ids in order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.id.as_str())
    }

    /// Items not yet done, in order
    pub fn pending(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.is_pending())
    }

    /// Items marked done, in order
    pub fn completed(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.done)
    }

    pub fn pending_count(&self) -> usize {
        self.pending().count()
    }

    pub fn done_count(&self) -> usize {
        self.completed().count()
    }
}
