//! The store: single owner of the to-do state
//!
//! Lifecycle is explicit: construct with a storage medium, `hydrate` once,
//! `subscribe` observers, then `dispatch` actions. Every dispatch that changes
//! the state notifies the observers and writes the new state through to
//! storage before returning.

use crate::error::Result;
use crate::persistence::PersistenceAdapter;
use crate::storage::KeyValueStorage;
use crate::todo::{Action, IdGenerator, Item, TimestampIdGenerator, TodoState, reduce};
use crate::validation;
use tracing::{debug, error};

/// Handle returned by `Store::subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&TodoState)>;

pub struct Store<S> {
    state: TodoState,
    persistence: PersistenceAdapter<S>,
    ids: Box<dyn IdGenerator>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl<S: KeyValueStorage> Store<S> {
    /// Create an empty store persisting under the default key
    ///
    /// The store is not hydrated yet; call `hydrate` to load persisted state.
    pub fn new(storage: S) -> Self {
        Self::from_adapter(PersistenceAdapter::new(storage))
    }

    /// Create an empty store persisting under `key`
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self::from_adapter(PersistenceAdapter::with_key(storage, key))
    }

    fn from_adapter(persistence: PersistenceAdapter<S>) -> Self {
        Self {
            state: TodoState::new(),
            persistence,
            ids: Box::new(TimestampIdGenerator),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Replace the id generator used for new items
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Load persisted state, if any
    ///
    /// A usable blob is applied as `Action::LoadState` and observers are
    /// notified. Nothing is written back. A missing or malformed blob keeps
    /// the current state.
    ///
    /// # Returns
    /// `true` if persisted state was loaded
    pub fn hydrate(&mut self) -> bool {
        match self.persistence.hydrate() {
            Some(loaded) => {
                if self.apply(Action::LoadState(loaded)) {
                    self.notify();
                }
                true
            }
            None => false,
        }
    }

    /// Current state
    pub fn state(&self) -> &TodoState {
        &self.state
    }

    /// Current items in order
    pub fn items(&self) -> &[Item] {
        self.state.items()
    }

    /// The underlying storage medium
    pub fn storage(&self) -> &S {
        self.persistence.storage()
    }

    /// Register an observer called with the new state after every change
    pub fn subscribe(&mut self, observer: impl FnMut(&TodoState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer
    ///
    /// # Returns
    /// `true` if the subscription existed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Validate and apply an action, then publish and persist the result
    ///
    /// # Errors
    /// - `StoreError::EmptyTitle` when an `Add`/`Edit` title is blank; the
    ///   state is left untouched.
    /// - A storage or serialization error when writing the new state fails.
    ///   The state change itself has already been applied and published.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        validation::validate_action(&action)?;

        let kind = action.kind();
        if !self.apply(action) {
            debug!(action = kind, "dispatch left state unchanged");
            return Ok(());
        }
        debug!(action = kind, items = self.state.len(), "dispatch changed state");

        self.notify();
        if let Err(e) = self.persistence.persist(&self.state) {
            error!(action = kind, error = %e, "failed to persist state");
            return Err(e);
        }
        Ok(())
    }

    /// Add an item and return its generated id
    pub fn add(&mut self, title: impl Into<String>, details: Option<String>) -> Result<String> {
        self.dispatch(Action::add(title, details))?;
        // Add always prepends
        Ok(self
            .state
            .items()
            .first()
            .map(|item| item.id.clone())
            .unwrap_or_default())
    }

    /// Run the reducer and swap in the result
    ///
    /// # Returns
    /// `true` if the state changed
    fn apply(&mut self, action: Action) -> bool {
        let next = reduce(&self.state, action, self.ids.as_mut());
        if next == self.state {
            return false;
        }
        self.state = next;
        true
    }

    fn notify(&mut self) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.state);
        }
    }
}
