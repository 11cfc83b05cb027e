//! # Application Dependencies
//!
//! Dependency grouping for [`crate::AppFlow`] and the use cases.
//!
//! This is NOT a builder: no build steps, no defaults, no hidden logic.

use std::sync::Arc;

use aim_core::ports::*;

/// Every port the application needs, already constructed by the bootstrap layer.
#[derive(Clone)]
pub struct AppDeps {
    pub preferences: Arc<dyn PreferenceStorePort>,
    pub hasher: Arc<dyn CredentialHasherPort>,
    pub portfolio: Arc<dyn PortfolioCatalogPort>,
}
