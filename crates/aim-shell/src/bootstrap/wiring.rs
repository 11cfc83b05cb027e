//! # Dependency Injection
//!
//! Creates the infra implementations and groups them into [`AppDeps`].
//!
//! This is the only place that depends on aim-infra and aim-app at the same
//! time. It assembles; it does not decide.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use aim_app::app_paths::AppPaths;
use aim_app::AppDeps;
use aim_core::config::AppConfig;
use aim_infra::{Argon2CredentialHasher, FilePreferenceStore, StaticPortfolioCatalog};
use tracing::info;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Preference store initialization failed: {0}")]
    PreferencesInit(String),
}

/// Configured path wins; an empty one falls back to the app data dir.
pub fn resolve_preferences_path(config: &AppConfig, paths: &AppPaths) -> PathBuf {
    if config.preferences_path.as_os_str().is_empty() {
        paths.preferences_path.clone()
    } else {
        config.preferences_path.clone()
    }
}

async fn create_preference_store(path: &Path) -> WiringResult<FilePreferenceStore> {
    FilePreferenceStore::open(path)
        .await
        .map_err(|e| WiringError::PreferencesInit(e.to_string()))
}

pub async fn wire_dependencies(config: &AppConfig, paths: &AppPaths) -> WiringResult<AppDeps> {
    let preferences_path = resolve_preferences_path(config, paths);
    let preferences = create_preference_store(&preferences_path).await?;
    info!(path = %preferences_path.display(), "Preference store wired");

    Ok(AppDeps {
        preferences: Arc::new(preferences),
        hasher: Arc::new(Argon2CredentialHasher::new()),
        portfolio: Arc::new(StaticPortfolioCatalog::new()),
    })
}
