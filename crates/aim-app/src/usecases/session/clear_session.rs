use std::sync::Arc;

use aim_core::ports::PreferenceStorePort;
use tracing::{info, info_span, Instrument};

use super::SessionError;

/// Use case for logging out: removes every stored preference.
pub struct ClearSession {
    store: Arc<dyn PreferenceStorePort>,
}

impl ClearSession {
    pub fn new(store: Arc<dyn PreferenceStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<(), SessionError> {
        let span = info_span!("usecase.clear_session.execute");

        async {
            self.store.clear().await?;
            info!("Session cleared");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
