//! Pure state transitions for the login form: `(state, event) -> state'`.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::field::{FieldId, InputField};
use super::rules;
use super::state::FormState;

/// Input coming from the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The text of `field` changed to `value`.
    Changed { field: FieldId, value: String },
    /// `field` lost focus; its current text is validated again.
    FocusLost { field: FieldId },
}

/// What happens to the confirmation field when the password changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmRevalidation {
    /// A confirmation that was already validated is checked again against
    /// the new password in the same step.
    #[default]
    OnPasswordChange,
    /// The confirmation keeps its previous result until its own change or
    /// focus-loss event.
    OnOwnEvent,
}

pub fn reduce(state: &FormState, event: FormEvent, policy: ConfirmRevalidation) -> FormState {
    match event {
        FormEvent::Changed { field, value } => apply(state, field, value, policy),
        FormEvent::FocusLost { field } => {
            let current = state.field(field).text().to_string();
            apply(state, field, current, policy)
        }
    }
}

pub fn on_field_change(
    state: &FormState,
    field: FieldId,
    value: impl Into<String>,
    policy: ConfirmRevalidation,
) -> FormState {
    reduce(
        state,
        FormEvent::Changed {
            field,
            value: value.into(),
        },
        policy,
    )
}

pub fn on_field_focus_lost(
    state: &FormState,
    field: FieldId,
    policy: ConfirmRevalidation,
) -> FormState {
    reduce(state, FormEvent::FocusLost { field }, policy)
}

fn apply(
    state: &FormState,
    field: FieldId,
    value: String,
    policy: ConfirmRevalidation,
) -> FormState {
    let password = match field {
        FieldId::Password => value.as_str(),
        _ => state.password().text(),
    };
    let result = rules::validate(field, &value, password);
    let mut next = state.with_field(field, InputField::validated(value, result));

    if field == FieldId::Password
        && policy == ConfirmRevalidation::OnPasswordChange
        && !next.password_confirm().is_pristine()
    {
        trace!("password changed, re-validating confirmation");
        let confirm = next.password_confirm().text().to_string();
        let result = rules::validate_password_confirm(&confirm, next.password().text());
        next = next.with_field(
            FieldId::PasswordConfirm,
            InputField::validated(confirm, result),
        );
    }

    next
}
