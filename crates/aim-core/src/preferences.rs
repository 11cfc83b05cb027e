//! Key-value preferences persisted on the device.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Keys written by login and removed by logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    Id,
    Password,
    Email,
    PhoneNumber,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 4] = [
        PreferenceKey::Id,
        PreferenceKey::Password,
        PreferenceKey::Email,
        PreferenceKey::PhoneNumber,
    ];

    /// Key name as stored on disk.
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceKey::Id => "id",
            PreferenceKey::Password => "pwd",
            PreferenceKey::Email => "email",
            PreferenceKey::PhoneNumber => "phone_number",
        }
    }
}

/// A full snapshot of the preference store.
///
/// Unknown keys found on disk are kept as-is so a round trip never loses data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences(BTreeMap<String, String>);

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: PreferenceKey) -> Option<&str> {
        self.0.get(key.as_str()).map(String::as_str)
    }

    pub fn set(&mut self, key: PreferenceKey, value: impl Into<String>) {
        self.0.insert(key.as_str().to_string(), value.into());
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Apply several writes in one go.
    pub fn apply(&mut self, entries: &[(PreferenceKey, String)]) {
        for (key, value) in entries {
            self.set(*key, value.clone());
        }
    }
}
