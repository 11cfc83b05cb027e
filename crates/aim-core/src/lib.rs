//! # aim-core
//!
//! Core domain models and business logic for AIM Mobile.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod app_dirs;
pub mod config;
pub mod credentials;
pub mod form;
pub mod navigation;
pub mod portfolio;
pub mod ports;
pub mod preferences;
pub mod session;

// Re-export commonly used types at the crate root
pub use config::{AppConfig, PasswordStorage};
pub use credentials::{Credentials, SecretString};
pub use form::{ConfirmRevalidation, FieldError, FieldId, FormEvent, FormState, InputField};
pub use navigation::{DashboardTab, NavStack, Route};
pub use preferences::{PreferenceKey, Preferences};
