//! Per-field validation rules.
//!
//! Every rule is a pure function of the raw text (plus, for the confirmation
//! field, the current password text). Lengths are counted in chars.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::FieldError;
use super::field::FieldId;

/// Shortest accepted id is one char longer than this.
pub const ID_MIN_EXCLUSIVE_LEN: usize = 7;

/// Minimum password length.
pub const PASSWORD_MIN_LEN: usize = 10;

static EMAIL_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
    )
    .unwrap()
});

static PHONE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10,11}$").unwrap());

pub fn validate_id(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() || value.chars().count() <= ID_MIN_EXCLUSIVE_LEN {
        return Err(FieldError::IdTooShort);
    }
    Ok(())
}

pub fn validate_password(value: &str) -> Result<(), FieldError> {
    let long_enough = value.chars().count() >= PASSWORD_MIN_LEN;
    let has_upper = value.chars().any(char::is_uppercase);
    let has_lower = value.chars().any(char::is_lowercase);
    // Only decimal digits count; `²` or `Ⅷ` are symbols here.
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_symbol = value
        .chars()
        .any(|c| !(c.is_ascii_digit() || (c.is_alphabetic() && !c.is_numeric())));

    if long_enough && has_upper && has_lower && has_digit && has_symbol {
        Ok(())
    } else {
        Err(FieldError::WeakPassword)
    }
}

/// Compares against the password text as it is *now*; the password's own
/// validity does not matter.
pub fn validate_password_confirm(value: &str, password: &str) -> Result<(), FieldError> {
    if value == password {
        Ok(())
    } else {
        Err(FieldError::PasswordMismatch)
    }
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if EMAIL_ADDRESS.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    if PHONE_NUMBER.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidPhone)
    }
}

/// Dispatch to the rule for `field`.
pub fn validate(field: FieldId, value: &str, password: &str) -> Result<(), FieldError> {
    match field {
        FieldId::Id => validate_id(value),
        FieldId::Password => validate_password(value),
        FieldId::PasswordConfirm => validate_password_confirm(value, password),
        FieldId::Email => validate_email(value),
        FieldId::Phone => validate_phone(value),
    }
}
