//! Infrastructure adapters for AIM Mobile: preference storage, credential
//! hashing, the sample portfolio catalog and app directories.

pub mod app_dirs;
pub mod portfolio;
pub mod preferences;
pub mod security;

pub use app_dirs::DirsAppDirsAdapter;
pub use portfolio::StaticPortfolioCatalog;
pub use preferences::{FilePreferenceStore, InMemoryPreferenceStore};
pub use security::Argon2CredentialHasher;
