//! AIM Mobile Application Orchestration Layer
//!
//! Use cases over the core ports plus the screen flow coordinator that a view
//! layer drives.

pub mod app_paths;
pub mod deps;
pub mod flow;
pub mod usecases;

pub use deps::AppDeps;
pub use flow::{AppFlow, SubmitError};
