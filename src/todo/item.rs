use serde::{Deserialize, Serialize};

/// A single to-do entry
///
/// `id` is assigned once by the reducer when the item is added and never
/// changes afterwards. `details` is omitted from the serialized form when
/// absent, so an absent value round-trips as absent rather than `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque unique identifier
    pub id: String,
    /// Display text, never empty
    pub title: String,
    /// Optional secondary text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Completion flag
    #[serde(default)]
    pub done: bool,
}

impl Item {
    /// Create a pending item with the given id
    pub fn new(id: impl Into<String>, title: impl Into<String>, details: Option<String>) -> Self {
        Self {
            id: id.into(),
            title: normalize_line_endings(&title.into()),
            details: normalize_details(details),
            done: false,
        }
    }

    /// Bring `title` and `details` into the stored form
    ///
    /// Line endings become `\n` and blank details become `None`. Idempotent.
    pub(crate) fn normalize_text(&mut self) {
        if self.title.contains('\r') {
            self.title = normalize_line_endings(&self.title);
        }
        self.details = normalize_details(self.details.take());
    }

    /// Check if the item still needs doing
    pub fn is_pending(&self) -> bool {
        !self.done
    }
}

/// Normalize line endings in a string to LF (\n)
pub(crate) fn normalize_line_endings(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}

/// Map blank details to `None`, normalizing line endings of the rest
///
/// An empty (or whitespace-only) details string means "no details", the same
/// way an empty optional field is treated as cleared on edit.
pub(crate) fn normalize_details(details: Option<String>) -> Option<String> {
    details
        .filter(|d| !d.trim().is_empty())
        .map(|d| normalize_line_endings(&d))
}
