//! Login form domain
//!
//! The login screen collects five fields. Each keystroke and each focus loss
//! is turned into a [`FormEvent`] and folded into a new [`FormState`] by the
//! pure reducer in [`reducer`]. The owner of the state (see `aim-app`)
//! publishes every reduced state as a whole, so a reader never observes a
//! field update without the matching aggregate validity.
//!
//! ```text
//! view ──FormEvent──▶ reduce(state, event, policy) ──▶ FormState'
//!                          │
//!                          └── rules::validate(field, text, password)
//! ```

mod error;
mod field;
pub mod reducer;
pub mod rules;
mod state;

pub use error::{FieldError, UnknownFieldError};
pub use field::{FieldId, FieldStatus, InputField};
pub use reducer::{on_field_change, on_field_focus_lost, reduce, ConfirmRevalidation, FormEvent};
pub use state::FormState;
