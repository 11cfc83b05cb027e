//! Port interfaces for the application layer
//!
//! Ports define the contract between use cases and infrastructure
//! implementations. Use cases only ever hold `Arc<dyn ...Port>`.

pub mod app_dirs;
mod credential_hasher;
pub mod errors;
mod portfolio;
mod preferences;

pub use app_dirs::AppDirsPort;
pub use credential_hasher::CredentialHasherPort;
pub use errors::{AppDirsError, CredentialHashError, PreferenceStoreError};
pub use portfolio::PortfolioCatalogPort;
pub use preferences::PreferenceStorePort;
