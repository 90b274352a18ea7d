//! Validation of actions before they reach the reducer
//!
//! The reducer is total and accepts anything it can represent. Rules about
//! what users may submit live here and are checked by `Store::dispatch`.

use crate::error::{Result, StoreError};
use crate::todo::Action;

/// Check that a title has visible content
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(StoreError::EmptyTitle);
    }
    Ok(())
}

/// Check an action against user-input rules
///
/// Only `Add` and `Edit` carry user text; every other action is accepted.
pub fn validate_action(action: &Action) -> Result<()> {
    match action {
        Action::Add(new_item) => validate_title(&new_item.title),
        Action::Edit { title, .. } => validate_title(title),
        Action::LoadState(_)
        | Action::Delete { .. }
        | Action::ToggleDone { .. }
        | Action::Reorder(_)
        | Action::Move { .. } => Ok(()),
    }
}
