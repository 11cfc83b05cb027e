use crate::credentials::Credentials;

use super::field::{FieldId, InputField};

/// Aggregate validation state of the login form.
///
/// Only the reducer can produce a state with a modified field, and it always
/// recomputes `is_valid` over the complete result, so `is_valid` is true iff
/// every field has been validated and none carries an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    id: InputField,
    password: InputField,
    password_confirm: InputField,
    email: InputField,
    phone: InputField,
    is_valid: bool,
}

impl FormState {
    /// Build a state from explicit fields, deriving validity.
    pub fn from_fields(
        id: InputField,
        password: InputField,
        password_confirm: InputField,
        email: InputField,
        phone: InputField,
    ) -> Self {
        let mut state = Self {
            id,
            password,
            password_confirm,
            email,
            phone,
            is_valid: false,
        };
        state.is_valid = state.all_fields_valid();
        state
    }

    pub fn field(&self, field: FieldId) -> &InputField {
        match field {
            FieldId::Id => &self.id,
            FieldId::Password => &self.password,
            FieldId::PasswordConfirm => &self.password_confirm,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
        }
    }

    pub fn id(&self) -> &InputField {
        &self.id
    }

    pub fn password(&self) -> &InputField {
        &self.password
    }

    pub fn password_confirm(&self) -> &InputField {
        &self.password_confirm
    }

    pub fn email(&self) -> &InputField {
        &self.email
    }

    pub fn phone(&self) -> &InputField {
        &self.phone
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Credentials to persist, only when the whole form is valid.
    pub fn credentials(&self) -> Option<Credentials> {
        self.is_valid.then(|| {
            Credentials::new(
                self.id.text(),
                self.password.text(),
                self.email.text(),
                self.phone.text(),
            )
        })
    }

    /// Returns a copy with `field` replaced and validity recomputed.
    pub(super) fn with_field(&self, field: FieldId, value: InputField) -> Self {
        let mut next = self.clone();
        *next.field_mut(field) = value;
        next.is_valid = next.all_fields_valid();
        next
    }

    fn field_mut(&mut self, field: FieldId) -> &mut InputField {
        match field {
            FieldId::Id => &mut self.id,
            FieldId::Password => &mut self.password,
            FieldId::PasswordConfirm => &mut self.password_confirm,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
        }
    }

    fn all_fields_valid(&self) -> bool {
        FieldId::ALL.iter().all(|f| self.field(*f).is_valid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldError;

    fn field(valid: bool) -> InputField {
        if valid {
            InputField::validated("ok", Ok(()))
        } else {
            InputField::validated("bad", Err(FieldError::IdTooShort))
        }
    }

    #[test]
    fn validity_matches_every_error_combination() {
        for mask in 0u8..32 {
            let bit = |i: u8| mask & (1 << i) == 0;
            let state = FormState::from_fields(
                field(bit(0)),
                field(bit(1)),
                field(bit(2)),
                field(bit(3)),
                field(bit(4)),
            );
            let no_errors = FieldId::ALL
                .iter()
                .all(|f| state.field(*f).error().is_none());
            assert_eq!(state.is_valid(), no_errors, "mask {mask:05b}");
        }
    }

    #[test]
    fn fresh_form_is_not_valid() {
        let state = FormState::default();
        assert!(FieldId::ALL.iter().all(|f| state.field(*f).error().is_none()));
        assert!(!state.is_valid());
        assert!(state.credentials().is_none());
    }

    #[test]
    fn credentials_come_from_field_texts() {
        let state = FormState::from_fields(
            InputField::validated("user0001", Ok(())),
            InputField::validated("Abcdefg12!", Ok(())),
            InputField::validated("Abcdefg12!", Ok(())),
            InputField::validated("a@b.com", Ok(())),
            InputField::validated("01012345678", Ok(())),
        );
        let creds = state.credentials().unwrap();
        assert_eq!(creds.id(), "user0001");
        assert_eq!(creds.password().expose(), "Abcdefg12!");
        assert_eq!(creds.email(), "a@b.com");
        assert_eq!(creds.phone(), "01012345678");
    }
}
