//! The to-do state-transition function
//!
//! `reduce` never mutates its input and never performs I/O. Persistence and
//! observer notification happen in `Store::dispatch` after the new state has
//! been computed.

use super::action::{Action, NewItem};
use super::id::IdGenerator;
use super::item::{Item, normalize_details, normalize_line_endings};
use super::state::TodoState;
use std::collections::HashSet;

/// Fresh ids requested from the generator before falling back to a suffix
const MAX_ID_ATTEMPTS: u32 = 8;

/// Compute the state that results from applying `action` to `state`
///
/// # Arguments
/// * `state` - The current state (left untouched)
/// * `action` - The transition to apply
/// * `ids` - Id source for `Action::Add`
///
/// # Returns
/// The new state. Actions that reference an unknown id, out-of-range indices,
/// or a reorder sequence that is not a permutation of the current ids return
/// an unchanged copy.
pub fn reduce(state: &TodoState, action: Action, ids: &mut dyn IdGenerator) -> TodoState {
    match action {
        Action::LoadState(loaded) => loaded,
        Action::Add(new_item) => add(state, new_item, ids),
        Action::Delete { id } => {
            let mut next = state.clone();
            next.remove(&id);
            next
        }
        Action::ToggleDone { id } => {
            let mut next = state.clone();
            if let Some(item) = next.find_mut(&id) {
                item.done = !item.done;
            }
            next
        }
        Action::Edit { id, title, details } => {
            let mut next = state.clone();
            if let Some(item) = next.find_mut(&id) {
                item.title = normalize_line_endings(&title);
                item.details = normalize_details(details);
            }
            next
        }
        Action::Reorder(items) => reorder(state, &items),
        Action::Move { from, to } => move_item(state, from, to),
    }
}

fn add(state: &TodoState, new_item: NewItem, ids: &mut dyn IdGenerator) -> TodoState {
    let mut next = state.clone();
    let id = fresh_id(&next, ids);
    next.push_front(Item::new(id, new_item.title, new_item.details));
    next
}

fn fresh_id(state: &TodoState, ids: &mut dyn IdGenerator) -> String {
    let mut id = ids.next_id();
    let mut attempt = 1;
    while state.contains(&id) && attempt < MAX_ID_ATTEMPTS {
        id = ids.next_id();
        attempt += 1;
    }

    // Generator keeps colliding; disambiguate with a counter
    let base = id.clone();
    let mut suffix = 1;
    while state.contains(&id) {
        id = format!("{}-{}", base, suffix);
        suffix += 1;
    }
    id
}

fn reorder(state: &TodoState, items: &[Item]) -> TodoState {
    if !is_permutation_of(state, items) {
        return state.clone();
    }

    // Contents come from the current state, only the order is taken over
    let ordered = items
        .iter()
        .filter_map(|item| state.find(&item.id).cloned())
        .collect::<Vec<_>>();
    TodoState::from_items(ordered)
}

fn is_permutation_of(state: &TodoState, items: &[Item]) -> bool {
    if items.len() != state.len() {
        return false;
    }
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .all(|item| state.contains(&item.id) && seen.insert(item.id.as_str()))
}

fn move_item(state: &TodoState, from: usize, to: usize) -> TodoState {
    let mut next = state.clone();
    if from >= next.items.len() || to >= next.items.len() || from == to {
        return next;
    }
    let item = next.items.remove(from);
    next.items.insert(to, item);
    next
}
