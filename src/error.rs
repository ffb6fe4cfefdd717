use std::io;

use thiserror::Error;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failures from the JSON-backed settings and shortcut stores.
///
/// Load paths recover from these locally (defaults / empty list); save
/// paths hand them to the caller as the failure of the triggering action.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not determine user data directory")]
    MissingDataDirectory,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
