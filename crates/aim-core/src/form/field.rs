use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{FieldError, UnknownFieldError};

/// The five inputs of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Id,
    Password,
    PasswordConfirm,
    Email,
    Phone,
}

impl FieldId {
    /// All fields in screen order.
    pub const ALL: [FieldId; 5] = [
        FieldId::Id,
        FieldId::Password,
        FieldId::PasswordConfirm,
        FieldId::Email,
        FieldId::Phone,
    ];

    /// Name used by the view layer when dispatching events.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Id => "id",
            FieldId::Password => "password",
            FieldId::PasswordConfirm => "passwordConfirm",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

/// Validation status of a single field.
///
/// `Pristine` means the field has never been validated: it carries no error
/// but does not count towards form validity either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Pristine,
    Valid,
    Invalid(FieldError),
}

impl From<Result<(), FieldError>> for FieldStatus {
    fn from(result: Result<(), FieldError>) -> Self {
        match result {
            Ok(()) => FieldStatus::Valid,
            Err(err) => FieldStatus::Invalid(err),
        }
    }
}

/// One field's raw text plus its latest validation result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputField {
    text: String,
    status: FieldStatus,
}

impl InputField {
    /// A field that has been validated with the given outcome.
    pub fn validated(text: impl Into<String>, result: Result<(), FieldError>) -> Self {
        Self {
            text: text.into(),
            status: result.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn status(&self) -> FieldStatus {
        self.status
    }

    /// `None` means no error is shown; check [`InputField::is_valid`] for validity.
    pub fn error(&self) -> Option<FieldError> {
        match self.status {
            FieldStatus::Invalid(err) => Some(err),
            FieldStatus::Pristine | FieldStatus::Valid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status == FieldStatus::Valid
    }

    pub fn is_pristine(&self) -> bool {
        self.status == FieldStatus::Pristine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip_through_from_str() {
        for field in FieldId::ALL {
            assert_eq!(field.as_str().parse::<FieldId>().unwrap(), field);
        }
    }

    #[test]
    fn unknown_field_name_is_rejected() {
        let err = "nickname".parse::<FieldId>().unwrap_err();
        assert_eq!(err, UnknownFieldError("nickname".to_string()));
    }

    #[test]
    fn pristine_field_has_no_error_but_is_not_valid() {
        let field = InputField::default();
        assert!(field.is_pristine());
        assert_eq!(field.error(), None);
        assert!(!field.is_valid());
    }

    #[test]
    fn validated_field_exposes_error() {
        let field = InputField::validated("123", Err(FieldError::InvalidPhone));
        assert_eq!(field.text(), "123");
        assert_eq!(field.error(), Some(FieldError::InvalidPhone));
        assert!(!field.is_valid());
    }
}
