mod access;
mod client;
mod error;

use crate::InvalidationHook;

use std::sync::Mutex;

/// Hook recording every invalidation reason it receives.
#[derive(Default)]
pub(crate) struct RecordingHook {
    pub(crate) reasons: Mutex<Vec<String>>,
}

impl InvalidationHook for RecordingHook {
    fn session_invalidated(&self, reason: &str) {
        self.reasons.lock().unwrap().push(reason.to_string());
    }
}
