//! # Application Runtime
//!
//! [`AppRuntime`] owns the wired dependencies and the screen flow. Commands
//! reach use cases through [`AppRuntime::usecases`] and the flow through
//! [`AppRuntime::flow`].
//!
//! ## Adding New Use Cases
//!
//! 1. Ensure the use case has a `new()` constructor taking its required ports
//! 2. Add a method to [`UseCases`] that calls `new()` with deps
//! 3. Commands can now call `runtime.usecases().your_use_case()`

use std::path::PathBuf;

use aim_app::app_paths::AppPaths;
use aim_app::usecases::{GetDashboard, ListEtfs};
use aim_app::{AppDeps, AppFlow};
use aim_core::app_dirs::AppDirs;
use aim_core::config::AppConfig;
use aim_core::ports::AppDirsPort;
use aim_infra::DirsAppDirsAdapter;
use anyhow::Context;
use tokio::sync::{Mutex, MutexGuard};
use tracing::info;

use super::config::load_config_if_present;
use super::wiring::wire_dependencies;

/// Command-line or host overrides applied before wiring.
#[derive(Debug, Clone, Default)]
pub struct RuntimeOptions {
    pub config_path: Option<PathBuf>,
    /// Replaces both the data and the config root.
    pub data_dir: Option<PathBuf>,
}

pub struct AppRuntime {
    deps: AppDeps,
    config: AppConfig,
    paths: AppPaths,
    flow: Mutex<AppFlow>,
}

impl AppRuntime {
    /// Must be called inside a tokio runtime; session tracking starts here.
    pub fn new(deps: AppDeps, config: AppConfig, paths: AppPaths) -> Self {
        let flow = AppFlow::new(&deps, &config);
        Self {
            deps,
            config,
            paths,
            flow: Mutex::new(flow),
        }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }

    pub async fn flow(&self) -> MutexGuard<'_, AppFlow> {
        self.flow.lock().await
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn paths(&self) -> &AppPaths {
        &self.paths
    }

    /// Stop background tasks. The runtime stays usable for reads.
    pub async fn shutdown(&self) {
        self.flow.lock().await.shutdown().await;
        info!("Runtime shut down");
    }
}

/// Use case factory bound to one runtime's dependencies.
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    pub fn get_dashboard(&self) -> GetDashboard {
        GetDashboard::new(self.runtime.deps.portfolio.clone())
    }

    pub fn list_etfs(&self) -> ListEtfs {
        ListEtfs::new(self.runtime.deps.portfolio.clone())
    }
}

/// Resolve app directories, honoring a `--data-dir` style override.
pub fn resolve_paths(data_dir: Option<PathBuf>) -> anyhow::Result<AppPaths> {
    let dirs = match data_dir {
        Some(dir) => AppDirs {
            app_data_root: dir.clone(),
            app_config_root: dir,
        },
        None => DirsAppDirsAdapter::new()
            .get_app_dirs()
            .context("Failed to resolve app directories")?,
    };
    Ok(AppPaths::from_app_dirs(&dirs))
}

/// Load config, wire dependencies and start the runtime.
pub async fn create_runtime(options: RuntimeOptions) -> anyhow::Result<AppRuntime> {
    let paths = resolve_paths(options.data_dir)?;
    let config_path = options
        .config_path
        .unwrap_or_else(|| paths.config_path.clone());
    let config = load_config_if_present(&config_path)?;
    let deps = wire_dependencies(&config, &paths).await?;

    info!(
        config = %config_path.display(),
        data_dir = %paths.preferences_path.parent().map(|p| p.display().to_string()).unwrap_or_default(),
        "Runtime created"
    );
    Ok(AppRuntime::new(deps, config, paths))
}
