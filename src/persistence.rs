//! Write-through persistence of `TodoState`
//!
//! The whole state is stored as one JSON blob under a fixed key. Loading is
//! forgiving: a missing, unreadable, or malformed blob leaves the store empty
//! and is only logged. Saving reports failures to the caller.

use crate::error::Result;
use crate::storage::KeyValueStorage;
use crate::todo::TodoState;
use tracing::{debug, warn};

/// Key under which the state blob is stored unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "todoListState";

pub struct PersistenceAdapter<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> PersistenceAdapter<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the persisted state, if there is a usable one
    ///
    /// # Returns
    /// `Some(state)` when a blob exists and parses; `None` otherwise. Read and
    /// parse failures are logged at warn level and otherwise ignored.
    pub fn hydrate(&self) -> Option<TodoState> {
        let blob = match self.storage.get(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                debug!(key = %self.key, "no persisted state");
                return None;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read persisted state, starting empty");
                return None;
            }
        };

        match serde_json::from_str::<TodoState>(&blob) {
            Ok(state) => {
                debug!(key = %self.key, items = state.len(), "loaded persisted state");
                Some(state)
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding malformed persisted state");
                None
            }
        }
    }

    /// Serialize and store the full state under the key
    pub fn persist(&mut self, state: &TodoState) -> Result<()> {
        let blob = serde_json::to_string(state)?;
        self.storage.set(&self.key, &blob)?;
        debug!(key = %self.key, items = state.len(), bytes = blob.len(), "persisted state");
        Ok(())
    }
}
