use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,

    #[error("system config directory is unavailable")]
    ConfigDirUnavailable,
}

/// Failure reported by a preference store.
///
/// `Clone` so one failure can be fanned out to several listeners.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PreferenceStoreError {
    #[error("preference storage io error: {0}")]
    Io(String),

    #[error("preference storage is corrupt: {0}")]
    Corrupt(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialHashError {
    #[error("hashing failed: {0}")]
    Hash(String),

    #[error("stored hash is malformed")]
    InvalidFormat,
}
