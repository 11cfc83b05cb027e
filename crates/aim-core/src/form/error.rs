use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failure attached to exactly one login field.
///
/// The display string is the user-facing message shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    #[error("아이디를 입력해주세요")]
    IdTooShort,

    #[error("비밀번호는 영문 대소문자, 숫자, 특수문자를 모두 포함하여 10자 이상이어야 합니다")]
    WeakPassword,

    #[error("입력한 비밀번호와 다릅니다")]
    PasswordMismatch,

    #[error("유효한 이메일 형식이 아닙니다")]
    InvalidEmail,

    #[error("휴대전화 번호는 숫자 10~11자리로 입력해주세요")]
    InvalidPhone,
}

impl FieldError {
    /// Stable machine-readable code, independent of the display language.
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::IdTooShort => "id_too_short",
            FieldError::WeakPassword => "weak_password",
            FieldError::PasswordMismatch => "password_mismatch",
            FieldError::InvalidEmail => "invalid_email",
            FieldError::InvalidPhone => "invalid_phone",
        }
    }
}

/// Raised when a field name coming from the view layer is not one of the
/// five login fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown login field: {0}")]
pub struct UnknownFieldError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        let all = [
            FieldError::IdTooShort,
            FieldError::WeakPassword,
            FieldError::PasswordMismatch,
            FieldError::InvalidEmail,
            FieldError::InvalidPhone,
        ];
        let mut codes: Vec<_> = all.iter().map(FieldError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn display_is_the_user_message() {
        assert_eq!(
            FieldError::PasswordMismatch.to_string(),
            "입력한 비밀번호와 다릅니다"
        );
    }
}
