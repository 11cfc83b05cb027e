use aim_core::ports::PreferenceStoreError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] PreferenceStoreError),

    #[error("password hashing failed: {0}")]
    Hash(String),

    /// The write task was cancelled or panicked before reporting.
    #[error("session write interrupted: {0}")]
    Interrupted(String),
}
