use crate::{Access, InvalidationHook};

use std::sync::Arc;

use log::{error, warn};
use reqwest::StatusCode;
use sk_store::SharedTokenStore;

/// Post-receive hook reacting to rejected credentials.
///
/// Only a 401 on a credentialed endpoint counts; every other outcome is
/// left for the caller to interpret.
#[derive(Clone)]
pub struct FailureDetector {
    store: SharedTokenStore,
    hook: Arc<dyn InvalidationHook>,
}

impl FailureDetector {
    pub fn new(store: SharedTokenStore, hook: Arc<dyn InvalidationHook>) -> Self {
        Self { store, hook }
    }

    pub fn is_authorization_failure(&self, status: StatusCode, access: Access) -> bool {
        status == StatusCode::UNAUTHORIZED && access == Access::Credentialed
    }

    pub fn session_epoch(&self) -> u64 {
        self.hook.session_epoch()
    }

    /// Clear stored credentials and raise the invalidation signal once.
    pub fn recover(&self, path: &str) {
        if let Err(e) = self.store.clear() {
            error!("Failed to clear credentials after rejection: {e}");
        }

        let reason = format!("authorization rejected for {path}");
        warn!("{reason}; session cleared");
        self.hook.session_invalidated(&reason);
    }
}
