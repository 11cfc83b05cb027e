use crate::ports::errors::CredentialHashError;

/// One-way password encoding used before a password is persisted.
pub trait CredentialHasherPort: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, CredentialHashError>;
    fn verify(&self, password: &str, encoded: &str) -> Result<bool, CredentialHashError>;
}
