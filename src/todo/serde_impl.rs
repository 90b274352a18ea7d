//! Serialization and deserialization implementations for TodoState
//!
//! The persisted form is `{ "items": [ ... ] }`. On load the older field name
//! `todoItems` is accepted as well. Items go through `TodoState::from_items`,
//! which normalizes text fields the same way the reducer does and drops
//! duplicate ids so the id index stays consistent.

use super::item::Item;
use super::state::TodoState;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Deserialize)]
struct TodoStateHelper {
    #[serde(alias = "todoItems")]
    items: Vec<Item>,
}

impl<'de> Deserialize<'de> for TodoState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let helper = TodoStateHelper::deserialize(deserializer)?;
        Ok(TodoState::from_items(helper.items))
    }
}

impl Serialize for TodoState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("TodoState", 1)?;
        state.serialize_field("items", &self.items)?;
        state.end()
    }
}
