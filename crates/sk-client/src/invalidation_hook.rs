/// Receives the "session invalidated" signal raised by the [`FailureDetector`].
///
/// The session layer implements this to reset its state and notify the UI;
/// the client itself knows nothing about navigation.
///
/// [`FailureDetector`]: crate::FailureDetector
pub trait InvalidationHook: Send + Sync {
    fn session_invalidated(&self, reason: &str);

    /// Counter that changes whenever the session is ended (logout or
    /// invalidation). Work started under one value must not write
    /// credentials once it has moved on.
    fn session_epoch(&self) -> u64 {
        0
    }
}

/// Hook for clients used outside a session (e.g. one-off scripts).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopInvalidationHook;

impl InvalidationHook for NoopInvalidationHook {
    fn session_invalidated(&self, reason: &str) {
        log::debug!("Session invalidated with no listener: {reason}");
    }
}
