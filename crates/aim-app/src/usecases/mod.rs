//! Business logic use cases

pub mod dashboard;
pub mod login_form;
pub mod session;

pub use dashboard::{DashboardView, GetDashboard, ListEtfs};
pub use login_form::LoginForm;
pub use session::{
    ClearSession, PendingWrite, SaveSession, SessionCommands, SessionError, SessionFailure,
    SessionTracker,
};
