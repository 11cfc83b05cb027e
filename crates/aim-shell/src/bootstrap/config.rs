//! # Configuration Loader
//!
//! Reads `config.toml` and maps it into the [`AppConfig`] DTO.
//!
//! Pure data loading: no validation and no business rules. I/O and parse
//! errors are reported with context.

use std::path::Path;

use aim_core::config::AppConfig;
use anyhow::Context;

/// Load configuration from a TOML file.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Like [`load_config`], but a missing file yields the defaults.
pub fn load_config_if_present(config_path: &Path) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        return Ok(AppConfig::defaults());
    }
    load_config(config_path)
}
