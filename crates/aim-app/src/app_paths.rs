use std::path::PathBuf;

use aim_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub preferences_path: PathBuf,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            preferences_path: dirs.app_data_root.join("preferences.json"),
            config_path: dirs.app_config_root.join("config.toml"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}
