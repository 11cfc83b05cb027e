use std::future::Future;
use std::sync::Arc;

use aim_core::credentials::Credentials;
use aim_core::ports::{CredentialHasherPort, PreferenceStorePort};
use aim_core::session::SessionOp;
use aim_core::PasswordStorage;
use serde::Serialize;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::error;

use super::{ClearSession, SaveSession, SessionError};

const FAILURE_CHANNEL_CAPACITY: usize = 16;

/// A failed login or logout write, broadcast to every failure subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionFailure {
    pub op: SessionOp,
    #[serde(serialize_with = "serialize_display")]
    pub error: SessionError,
}

fn serialize_display<S: serde::Serializer>(err: &SessionError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(err)
}

/// Handle to an in-flight session write.
///
/// Dropping it detaches the write; it still runs to completion and failures
/// still reach the log and the failure channel.
#[must_use = "await `confirmed()` or drop explicitly to fire and forget"]
pub struct PendingWrite {
    op: SessionOp,
    handle: JoinHandle<Result<(), SessionError>>,
}

impl PendingWrite {
    pub fn op(&self) -> SessionOp {
        self.op
    }

    /// Wait until the write has been committed to the store.
    pub async fn confirmed(self) -> Result<(), SessionError> {
        match self.handle.await {
            Ok(result) => result,
            Err(err) => Err(SessionError::Interrupted(err.to_string())),
        }
    }
}

/// Login and logout entry points. Each write runs on its own task.
pub struct SessionCommands {
    save: Arc<SaveSession>,
    clear: Arc<ClearSession>,
    failures: broadcast::Sender<SessionFailure>,
}

impl SessionCommands {
    pub fn new(
        store: Arc<dyn PreferenceStorePort>,
        hasher: Arc<dyn CredentialHasherPort>,
        storage: PasswordStorage,
    ) -> Self {
        let (failures, _) = broadcast::channel(FAILURE_CHANNEL_CAPACITY);
        Self {
            save: Arc::new(SaveSession::new(store.clone(), hasher, storage)),
            clear: Arc::new(ClearSession::new(store)),
            failures,
        }
    }

    pub fn login(&self, credentials: Credentials) -> PendingWrite {
        let save = self.save.clone();
        self.spawn_write(SessionOp::Login, async move { save.execute(&credentials).await })
    }

    pub fn logout(&self) -> PendingWrite {
        let clear = self.clear.clone();
        self.spawn_write(SessionOp::Logout, async move { clear.execute().await })
    }

    pub fn subscribe_failures(&self) -> broadcast::Receiver<SessionFailure> {
        self.failures.subscribe()
    }

    fn spawn_write<F>(&self, op: SessionOp, write: F) -> PendingWrite
    where
        F: Future<Output = Result<(), SessionError>> + Send + 'static,
    {
        let failures = self.failures.clone();
        let handle = tokio::spawn(async move {
            let result = write.await;
            if let Err(err) = &result {
                error!(op = %op, error = %err, "session write failed");
                // No subscribers is fine; the error is already logged.
                let _ = failures.send(SessionFailure {
                    op,
                    error: err.clone(),
                });
            }
            result
        });
        PendingWrite { op, handle }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aim_core::ports::PreferenceStoreError;
    use aim_core::PreferenceKey;
    use aim_infra::preferences::InMemoryPreferenceStore;
    use aim_infra::security::Argon2CredentialHasher;

    fn commands(store: Arc<InMemoryPreferenceStore>) -> SessionCommands {
        SessionCommands::new(
            store,
            Arc::new(Argon2CredentialHasher::with_params(1024, 1, 1).unwrap()),
            PasswordStorage::Hashed,
        )
    }

    fn credentials() -> Credentials {
        Credentials::new("user0001", "Abcdefg12!", "a@b.com", "01012345678")
    }

    #[tokio::test]
    async fn login_then_logout_round_trip() {
        let store = Arc::new(InMemoryPreferenceStore::new());
        let session = commands(store.clone());

        session.login(credentials()).confirmed().await.unwrap();
        let prefs = store.snapshot();
        assert_eq!(prefs.get(PreferenceKey::Id), Some("user0001"));
        assert_ne!(prefs.get(PreferenceKey::Password), Some("Abcdefg12!"));

        session.logout().confirmed().await.unwrap();
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn dropped_handle_still_completes_the_write() {
        let store = Arc::new(InMemoryPreferenceStore::new());
        let session = commands(store.clone());
        let mut prefs = store.observe();

        drop(session.login(credentials()));

        prefs
            .wait_for(|p| p.get(PreferenceKey::Id).is_some())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn failures_are_returned_and_broadcast() {
        let store = Arc::new(InMemoryPreferenceStore::new());
        store.fail_writes_with(Some(PreferenceStoreError::Io("read-only".to_string())));
        let session = commands(store);
        let mut failures = session.subscribe_failures();

        let pending = session.logout();
        assert_eq!(pending.op(), SessionOp::Logout);
        let err = pending.confirmed().await.unwrap_err();

        let failure = failures.recv().await.unwrap();
        assert_eq!(failure.op, SessionOp::Logout);
        assert_eq!(failure.error, err);
    }
}
