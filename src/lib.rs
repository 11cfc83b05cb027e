//! AIM Mobile headless driver
//!
//! Drives the login form, session and dashboard commands from the command line.

pub mod cli;
mod output;

pub use cli::run;
