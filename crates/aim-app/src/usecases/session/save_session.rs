use std::sync::Arc;

use aim_core::credentials::Credentials;
use aim_core::ports::{CredentialHasherPort, PreferenceStorePort};
use aim_core::{PasswordStorage, PreferenceKey};
use tracing::{info, info_span, warn, Instrument};

use super::SessionError;

/// Use case for logging in: persists the four credential values in one edit.
///
/// ## Behavior
/// - Encodes the password according to [`PasswordStorage`]
/// - Writes `id`, `pwd`, `email` and `phone_number` with a single `put_all`,
///   overwriting whatever was stored before
pub struct SaveSession {
    store: Arc<dyn PreferenceStorePort>,
    hasher: Arc<dyn CredentialHasherPort>,
    storage: PasswordStorage,
}

impl SaveSession {
    pub fn new(
        store: Arc<dyn PreferenceStorePort>,
        hasher: Arc<dyn CredentialHasherPort>,
        storage: PasswordStorage,
    ) -> Self {
        Self {
            store,
            hasher,
            storage,
        }
    }

    pub async fn execute(&self, credentials: &Credentials) -> Result<(), SessionError> {
        let span = info_span!(
            "usecase.save_session.execute",
            id = %credentials.id(),
            storage = ?self.storage,
        );

        async {
            let pwd = match self.storage {
                PasswordStorage::Hashed => self
                    .hasher
                    .hash(credentials.password().expose())
                    .map_err(|e| SessionError::Hash(e.to_string()))?,
                PasswordStorage::Plaintext => {
                    warn!("Persisting password without hashing");
                    credentials.password().expose().to_string()
                }
            };

            self.store
                .put_all(vec![
                    (PreferenceKey::Id, credentials.id().to_string()),
                    (PreferenceKey::Password, pwd),
                    (PreferenceKey::Email, credentials.email().to_string()),
                    (PreferenceKey::PhoneNumber, credentials.phone().to_string()),
                ])
                .await?;

            info!("Session saved");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
