use sk_client::InvalidationHook;
use sk_core::{SessionEvent, SessionState};

use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info, warn};
use tokio::sync::{broadcast, watch};

const EVENT_CAPACITY: usize = 16;

/// Shared session state cell and event bus.
///
/// The controller is the only writer apart from the failure detector, which
/// reaches the context through [`InvalidationHook`].
pub struct SessionContext {
    state_tx: watch::Sender<SessionState>,
    event_tx: broadcast::Sender<SessionEvent>,
    epoch: AtomicU64,
    login_path: String,
}

impl SessionContext {
    pub fn new(login_path: impl Into<String>) -> Self {
        let (state_tx, _) = watch::channel(SessionState::default());
        let (event_tx, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            state_tx,
            event_tx,
            epoch: AtomicU64::new(0),
            login_path: login_path.into(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    pub fn subscribe_state(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_tx.subscribe()
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Incremented by every logout and invalidation.
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    pub(crate) fn advance_epoch(&self) -> u64 {
        self.epoch.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(crate) fn set_state(&self, state: SessionState) {
        debug!("Session state -> {}", state.label());
        self.state_tx.send_replace(state);
    }

    /// Write `state` only if no logout or invalidation happened since `epoch`.
    ///
    /// The check runs under the cell's write lock, so it cannot interleave
    /// with a concurrent [`set_state`](Self::set_state).
    pub(crate) fn commit_if_current(&self, epoch: u64, state: SessionState) -> bool {
        self.state_tx.send_if_modified(|current| {
            if self.epoch() != epoch {
                return false;
            }
            debug!("Session state -> {}", state.label());
            *current = state;
            true
        })
    }

    pub(crate) fn emit(&self, event: SessionEvent) {
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}

impl InvalidationHook for SessionContext {
    fn session_invalidated(&self, reason: &str) {
        self.advance_epoch();
        self.set_state(SessionState::Unauthenticated);

        warn!("Session invalidated: {reason}");
        info!("Redirecting to {}", self.login_path);

        self.emit(SessionEvent::Invalidated {
            redirect_to: self.login_path.clone(),
            reason: reason.to_string(),
        });
    }

    fn session_epoch(&self) -> u64 {
        self.epoch()
    }
}
