use std::sync::{Mutex, PoisonError};

use aim_core::ports::{PreferenceStoreError, PreferenceStorePort};
use aim_core::{PreferenceKey, Preferences};
use async_trait::async_trait;
use tokio::sync::watch;

/// Volatile store for tests and headless runs.
///
/// [`InMemoryPreferenceStore::fail_writes_with`] makes every following write
/// fail with the given error until it is reset with `None`.
pub struct InMemoryPreferenceStore {
    snapshot: watch::Sender<Preferences>,
    write_failure: Mutex<Option<PreferenceStoreError>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::with_preferences(Preferences::new())
    }

    pub fn with_preferences(initial: Preferences) -> Self {
        let (snapshot, _) = watch::channel(initial);
        Self {
            snapshot,
            write_failure: Mutex::new(None),
        }
    }

    pub fn fail_writes_with(&self, failure: Option<PreferenceStoreError>) {
        *self
            .write_failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = failure;
    }

    pub fn snapshot(&self) -> Preferences {
        self.snapshot.borrow().clone()
    }

    fn check_writable(&self) -> Result<(), PreferenceStoreError> {
        match &*self
            .write_failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
        {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl Default for InMemoryPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PreferenceStorePort for InMemoryPreferenceStore {
    fn observe(&self) -> watch::Receiver<Preferences> {
        self.snapshot.subscribe()
    }

    async fn get(&self, key: PreferenceKey) -> Result<Option<String>, PreferenceStoreError> {
        Ok(self.snapshot.borrow().get(key).map(str::to_string))
    }

    async fn put_all(&self, entries: Vec<(PreferenceKey, String)>) -> Result<(), PreferenceStoreError> {
        self.check_writable()?;
        self.snapshot.send_modify(|prefs| prefs.apply(&entries));
        Ok(())
    }

    async fn clear(&self) -> Result<(), PreferenceStoreError> {
        self.check_writable()?;
        self.snapshot.send_modify(Preferences::clear);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn injected_failure_blocks_writes_until_reset() {
        let store = InMemoryPreferenceStore::new();
        store.fail_writes_with(Some(PreferenceStoreError::Io("boom".to_string())));

        let err = store
            .put_all(vec![(PreferenceKey::Id, "user0001".to_string())])
            .await
            .unwrap_err();
        assert_eq!(err, PreferenceStoreError::Io("boom".to_string()));
        assert!(store.snapshot().is_empty());

        store.fail_writes_with(None);
        store
            .put_all(vec![(PreferenceKey::Id, "user0001".to_string())])
            .await
            .unwrap();
        assert_eq!(
            store.get(PreferenceKey::Id).await.unwrap().as_deref(),
            Some("user0001")
        );
    }

    #[tokio::test]
    async fn clear_notifies_observers() {
        let mut prefs = Preferences::new();
        prefs.set(PreferenceKey::Id, "user0001");
        let store = InMemoryPreferenceStore::with_preferences(prefs);
        let mut rx = store.observe();

        store.clear().await.unwrap();

        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_empty());
    }
}
