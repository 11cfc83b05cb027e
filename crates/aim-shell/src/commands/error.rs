use aim_app::usecases::SessionError;
use aim_app::SubmitError;
use aim_core::form::UnknownFieldError;
use serde::Serialize;

/// Error payload returned to the view host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct CommandError {
    pub code: &'static str,
    pub message: String,
}

impl CommandError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<UnknownFieldError> for CommandError {
    fn from(err: UnknownFieldError) -> Self {
        Self::new("unknown_field", err.to_string())
    }
}

impl From<SessionError> for CommandError {
    fn from(err: SessionError) -> Self {
        let code = match &err {
            SessionError::Store(_) => "session_store",
            SessionError::Hash(_) => "session_hash",
            SessionError::Interrupted(_) => "session_interrupted",
        };
        Self::new(code, err.to_string())
    }
}

impl From<SubmitError> for CommandError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::InvalidForm => Self::new("invalid_form", err.to_string()),
            SubmitError::Session(inner) => inner.into(),
        }
    }
}

/// Centralized error mapping for commands backed by `anyhow` use cases.
pub fn map_err(err: anyhow::Error) -> CommandError {
    CommandError::new("internal", format!("{err:#}"))
}
