//! Session presence and the login/logout writes behind it.

mod clear_session;
mod commands;
mod error;
mod save_session;
mod tracker;

pub use clear_session::ClearSession;
pub use commands::{PendingWrite, SessionCommands, SessionFailure};
pub use error::SessionError;
pub use save_session::SaveSession;
pub use tracker::SessionTracker;
