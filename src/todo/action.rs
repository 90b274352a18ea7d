use crate::todo::item::Item;
use crate::todo::state::TodoState;

/// Fields supplied by the user when adding an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub title: String,
    pub details: Option<String>,
}

impl NewItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Every state transition the reducer understands
///
/// The set is closed: there is no way to construct an action the reducer
/// does not handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the whole state (startup hydration)
    LoadState(TodoState),
    /// Prepend a new pending item with a freshly generated id
    Add(NewItem),
    /// Remove the item with this id
    Delete { id: String },
    /// Flip the `done` flag of the item with this id
    ToggleDone { id: String },
    /// Replace title and details of the item with this id
    Edit {
        id: String,
        title: String,
        details: Option<String>,
    },
    /// Rearrange items to follow the order of this sequence
    ///
    /// Only the ids of the supplied items are used; contents stay as held
    /// by the current state.
    Reorder(Vec<Item>),
    /// Move the item at index `from` so that it ends up at index `to`
    Move { from: usize, to: usize },
}

impl Action {
    pub fn add(title: impl Into<String>, details: Option<String>) -> Self {
        Action::Add(NewItem {
            title: title.into(),
            details,
        })
    }

    pub fn delete(id: impl Into<String>) -> Self {
        Action::Delete { id: id.into() }
    }

    pub fn toggle_done(id: impl Into<String>) -> Self {
        Action::ToggleDone { id: id.into() }
    }

    pub fn edit(id: impl Into<String>, title: impl Into<String>, details: Option<String>) -> Self {
        Action::Edit {
            id: id.into(),
            title: title.into(),
            details,
        }
    }

    /// Short name used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Action::LoadState(_) => "load_state",
            Action::Add(_) => "add",
            Action::Delete { .. } => "delete",
            Action::ToggleDone { .. } => "toggle_done",
            Action::Edit { .. } => "edit",
            Action::Reorder(_) => "reorder",
            Action::Move { .. } => "move",
        }
    }
}
