//! Error type shared by all storage operations.

use thiserror::Error;

/// Failures surfaced by the store and its query layer.
///
/// `MissingProfile` and `PlanNotFound` are the recoverable domain conditions;
/// callers turn them into a message pointing at the command to run next.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no user profile saved yet")]
    MissingProfile,
    #[error("no saved plan with id {0:?}")]
    PlanNotFound(String),
}
