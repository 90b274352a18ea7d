use crate::todo::item::Item;
use std::collections::HashSet;

/// The ordered collection of to-do items owned by a `Store`
#[derive(Clone)]
pub struct TodoState {
    /// Items in user-visible order
    ///
    /// Order is significant: new items are prepended, drag-reorders rearrange
    /// it, and it is persisted exactly as stored here.
    pub(crate) items: Vec<Item>,

    /// Set of ids present in `items`, for O(1) duplicate detection
    ///
    /// Kept in sync with `items` by every mutating method below. Not
    /// serialized; rebuilt from `items` during deserialization.
    pub(crate) id_index: HashSet<String>,
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TodoState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoState")
            .field("items", &self.items)
            .finish()
    }
}

// Equality is defined by the ordered items alone; the index is derived data.
impl PartialEq for TodoState {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for TodoState {}

// Serialize/Deserialize implementations are in serde_impl.rs

impl TodoState {
    /// Create a new empty state
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            id_index: HashSet::new(),
        }
    }

    /// Build a state from an ordered list of items
    ///
    /// Items whose id already appeared earlier in the list are dropped, so the
    /// first occurrence of an id wins.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut state = Self::new();
        for item in items {
            state.push_back(item);
        }
        state
    }

    /// All items in order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Consume the state, returning its items
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Append an item unless its id is already present
    ///
    /// Text fields are normalized on the way in, so the state never holds
    /// `\r` line endings or blank details.
    ///
    /// # Returns
    /// `true` if the item was added
    pub(crate) fn push_back(&mut self, mut item: Item) -> bool {
        item.normalize_text();
        if !self.id_index.insert(item.id.clone()) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Prepend an item unless its id is already present
    ///
    /// # Returns
    /// `true` if the item was added
    pub(crate) fn push_front(&mut self, mut item: Item) -> bool {
        item.normalize_text();
        if !self.id_index.insert(item.id.clone()) {
            return false;
        }
        self.items.insert(0, item);
        true
    }

    /// Remove an item by id and return it
    pub(crate) fn remove(&mut self, id: &str) -> Option<Item> {
        let pos = self.position(id)?;
        self.id_index.remove(id);
        Some(self.items.remove(pos))
    }

    /// Find an item by id and return a mutable reference
    pub(crate) fn find_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}
