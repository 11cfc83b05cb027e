//! Login form controller.
//!
//! Owns the current [`FormState`] and publishes every new snapshot through a
//! watch channel, so readers only ever see complete states.

use std::str::FromStr;

use aim_core::form::{reduce, ConfirmRevalidation, FieldId, FormEvent, FormState, UnknownFieldError};
use tokio::sync::watch;
use tracing::debug;

pub struct LoginForm {
    state: watch::Sender<FormState>,
    policy: ConfirmRevalidation,
}

impl LoginForm {
    pub fn new(policy: ConfirmRevalidation) -> Self {
        let (state, _) = watch::channel(FormState::default());
        Self { state, policy }
    }

    /// Apply one event and publish the resulting state.
    pub fn dispatch(&self, event: FormEvent) -> FormState {
        let field = match &event {
            FormEvent::Changed { field, .. } | FormEvent::FocusLost { field } => *field,
        };
        let next = reduce(&self.state.borrow(), event, self.policy);

        // Field text is never logged; it may be a password.
        debug!(
            field = %field,
            field_error = next.field(field).error().map(|e| e.code()),
            is_valid = next.is_valid(),
            "login form updated"
        );

        self.state.send_replace(next.clone());
        next
    }

    pub fn field_changed(&self, field: FieldId, value: impl Into<String>) -> FormState {
        self.dispatch(FormEvent::Changed {
            field,
            value: value.into(),
        })
    }

    pub fn focus_lost(&self, field: FieldId) -> FormState {
        self.dispatch(FormEvent::FocusLost { field })
    }

    /// String-keyed variant for view hosts. Unknown names leave the state untouched.
    pub fn field_changed_named(
        &self,
        field: &str,
        value: impl Into<String>,
    ) -> Result<FormState, UnknownFieldError> {
        let field = FieldId::from_str(field)?;
        Ok(self.field_changed(field, value))
    }

    pub fn focus_lost_named(&self, field: &str) -> Result<FormState, UnknownFieldError> {
        let field = FieldId::from_str(field)?;
        Ok(self.focus_lost(field))
    }

    pub fn snapshot(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    /// Back to a fresh, pristine form.
    pub fn reset(&self) {
        self.state.send_replace(FormState::default());
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new(ConfirmRevalidation::default())
    }
}
