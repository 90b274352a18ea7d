use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by `Store` and the storage backends
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Item title must not be empty")]
    EmptyTitle,

    #[error("Invalid storage key '{key}': {reason}")]
    InvalidKey { key: String, reason: &'static str },

    #[error("Failed to access storage at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
