//! Commands a view host calls. Each takes the runtime and returns a DTO or a
//! serializable [`CommandError`].

pub mod dashboard;
pub mod dto;
pub mod error;
pub mod login;
pub mod navigation;

pub use dashboard::{get_dashboard, list_etfs};
pub use error::CommandError;
pub use login::{
    field_changed, field_focus_lost, form_state, logout, session_status, submit_login,
};
pub use navigation::{current_route, go_back, open_etf_detail, select_tab};
