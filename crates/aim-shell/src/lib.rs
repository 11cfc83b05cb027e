//! View-host adapter for AIM Mobile.
//!
//! `bootstrap` assembles the application (config, tracing, wiring, runtime);
//! `commands` is the surface a view layer calls into.

pub mod bootstrap;
pub mod commands;

pub use bootstrap::{create_runtime, AppRuntime, RuntimeOptions};
