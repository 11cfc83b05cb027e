//! # Configuration DTO
//!
//! Data structures for `config.toml` and the TOML → DTO mapping.
//!
//! This module holds data only: no file access and no range checks. A
//! missing key maps to its default; an unrecognised enum string maps to the
//! default variant.
//!
//! ```toml
//! [storage]
//! preferences_path = "/path/to/preferences.json"
//!
//! [login]
//! confirm_revalidation = "on_password_change"   # or "on_own_event"
//! await_persistence = true
//!
//! [security]
//! password_storage = "hashed"                   # or "plaintext"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::form::ConfirmRevalidation;

/// How the password is written to the preference store on login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordStorage {
    /// Argon2id hash, hex encoded.
    #[default]
    Hashed,
    /// Raw text. Only meant for fixtures reproducing the legacy store layout.
    Plaintext,
}

/// Application configuration DTO
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Preference file location; empty means "use the app data dir".
    pub preferences_path: PathBuf,

    /// Confirmation re-validation policy for the login form.
    pub confirm_revalidation: ConfirmRevalidation,

    /// Wait for the login write to land before leaving the login screen.
    pub await_persistence: bool,

    pub password_storage: PasswordStorage,
}

impl AppConfig {
    /// Defaults used when no config file exists.
    pub fn defaults() -> Self {
        Self {
            preferences_path: PathBuf::new(),
            confirm_revalidation: ConfirmRevalidation::default(),
            await_persistence: true,
            password_storage: PasswordStorage::default(),
        }
    }

    /// Create AppConfig from a parsed TOML document.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let defaults = Self::defaults();
        let section_str = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
        };

        Ok(Self {
            preferences_path: PathBuf::from(section_str("storage", "preferences_path").unwrap_or("")),
            confirm_revalidation: match section_str("login", "confirm_revalidation") {
                Some("on_own_event") => ConfirmRevalidation::OnOwnEvent,
                _ => defaults.confirm_revalidation,
            },
            await_persistence: toml_value
                .get("login")
                .and_then(|l| l.get("await_persistence"))
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.await_persistence),
            password_storage: match section_str("security", "password_storage") {
                Some("plaintext") => PasswordStorage::Plaintext,
                _ => defaults.password_storage,
            },
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> AppConfig {
        let value: toml::Value = toml::from_str(src).unwrap();
        AppConfig::from_toml(&value).unwrap()
    }

    #[test]
    fn empty_document_maps_to_defaults() {
        assert_eq!(parse(""), AppConfig::defaults());
        assert!(AppConfig::defaults().await_persistence);
    }

    #[test]
    fn every_section_is_mapped() {
        let config = parse(
            r#"
            [storage]
            preferences_path = "/data/prefs.json"

            [login]
            confirm_revalidation = "on_own_event"
            await_persistence = false

            [security]
            password_storage = "plaintext"
            "#,
        );
        assert_eq!(config.preferences_path, PathBuf::from("/data/prefs.json"));
        assert_eq!(config.confirm_revalidation, ConfirmRevalidation::OnOwnEvent);
        assert!(!config.await_persistence);
        assert_eq!(config.password_storage, PasswordStorage::Plaintext);
    }

    #[test]
    fn unknown_enum_strings_fall_back_to_defaults() {
        let config = parse(
            r#"
            [login]
            confirm_revalidation = "sometimes"
            [security]
            password_storage = "rot13"
            "#,
        );
        assert_eq!(config.confirm_revalidation, ConfirmRevalidation::OnPasswordChange);
        assert_eq!(config.password_storage, PasswordStorage::Hashed);
    }
}
