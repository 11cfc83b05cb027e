use std::sync::Arc;

use aim_core::ports::PreferenceStorePort;
use aim_core::session::presence_of;
use aim_core::Preferences;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Live projection of "is a saved id present" over the preference store.
///
/// One background task per tracker. Presence reads `false` until the task
/// has processed the first snapshot; [`SessionTracker::synced`] waits for that.
pub struct SessionTracker {
    presence: watch::Receiver<bool>,
    synced: watch::Receiver<bool>,
    shutdown_tx: watch::Sender<bool>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl SessionTracker {
    /// Subscribe to `store` and start tracking. Must be called inside a tokio runtime.
    pub fn start(store: Arc<dyn PreferenceStorePort>) -> Self {
        let (presence_tx, presence) = watch::channel(false);
        let (synced_tx, synced) = watch::channel(false);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let prefs = store.observe();
        let handle = tokio::spawn(observe_loop(prefs, presence_tx, synced_tx, shutdown_rx));

        Self {
            presence,
            synced,
            shutdown_tx,
            handle: Mutex::new(Some(handle)),
        }
    }

    pub fn is_present(&self) -> bool {
        *self.presence.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.presence.clone()
    }

    /// Resolves once the first store snapshot has been applied.
    ///
    /// Returns immediately if the tracker was stopped before that happened.
    pub async fn synced(&self) {
        let mut synced = self.synced.clone();
        if synced.wait_for(|done| *done).await.is_err() {
            debug!("session tracker stopped before first snapshot");
        }
    }

    /// Stop observing and wait for the task to finish. Idempotent.
    pub async fn stop(&self) {
        let Some(handle) = self.handle.lock().await.take() else {
            return;
        };

        if let Err(err) = self.shutdown_tx.send(true) {
            warn!("session tracker shutdown send failed: {err}");
        }

        if let Err(err) = handle.await {
            warn!("session tracker task ended abnormally: {err}");
        }
        info!("Session tracker stopped");
    }
}

impl Drop for SessionTracker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.get_mut().take() {
            handle.abort();
        }
    }
}

async fn observe_loop(
    mut prefs: watch::Receiver<Preferences>,
    presence_tx: watch::Sender<bool>,
    synced_tx: watch::Sender<bool>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let present = presence_of(&prefs.borrow_and_update());
    publish(&presence_tx, present);
    synced_tx.send_replace(true);

    loop {
        tokio::select! {
            biased;
            _ = shutdown_rx.changed() => {
                debug!("session tracker shutting down");
                return;
            }
            changed = prefs.changed() => {
                if changed.is_err() {
                    debug!("preference store closed, session tracker exiting");
                    return;
                }
                let present = presence_of(&prefs.borrow_and_update());
                publish(&presence_tx, present);
            }
        }
    }
}

fn publish(presence_tx: &watch::Sender<bool>, present: bool) {
    let changed = presence_tx.send_if_modified(|current| {
        if *current == present {
            return false;
        }
        *current = present;
        true
    });
    if changed {
        debug!(present, "session presence changed");
    }
}
