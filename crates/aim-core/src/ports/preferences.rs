use async_trait::async_trait;
use tokio::sync::watch;

use crate::ports::errors::PreferenceStoreError;
use crate::preferences::{PreferenceKey, Preferences};

/// Persistent key-value store backing the session.
///
/// Every committed write publishes a fresh snapshot to all receivers handed
/// out by [`PreferenceStorePort::observe`]. A receiver always starts with the
/// state that was current when it subscribed.
#[async_trait]
pub trait PreferenceStorePort: Send + Sync {
    fn observe(&self) -> watch::Receiver<Preferences>;

    async fn get(&self, key: PreferenceKey) -> Result<Option<String>, PreferenceStoreError>;

    /// Write all entries as one unit: either every entry lands or none does.
    async fn put_all(&self, entries: Vec<(PreferenceKey, String)>) -> Result<(), PreferenceStoreError>;

    /// Remove every stored key.
    async fn clear(&self) -> Result<(), PreferenceStoreError>;
}
