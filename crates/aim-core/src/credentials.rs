use std::fmt;
use std::ops::Deref;
use zeroize::Zeroize;

/// A sensitive string that must never be logged or serialized.
///
/// - not `Clone`
/// - `Debug` / `Display` print `[REDACTED]`
/// - memory is zeroed on drop
pub struct SecretString {
    inner: String,
}

impl SecretString {
    pub fn new(value: String) -> Self {
        Self { inner: value }
    }

    /// Borrow the inner secret as &str.
    pub fn expose(&self) -> &str {
        &self.inner
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Deref for SecretString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.expose()
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

/// The four values persisted on login.
#[derive(Debug)]
pub struct Credentials {
    id: String,
    password: SecretString,
    email: String,
    phone: String,
}

impl Credentials {
    pub fn new(
        id: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            password: SecretString::new(password.into()),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}
