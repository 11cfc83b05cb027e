pub mod config;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_config_if_present};
pub use runtime::{create_runtime, AppRuntime, RuntimeOptions, UseCases};
pub use wiring::{wire_dependencies, WiringError};
