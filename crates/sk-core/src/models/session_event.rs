use crate::UserId;

/// Notifications published to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Credentials were rejected by the API; the UI should navigate to `redirect_to`.
    Invalidated { redirect_to: String, reason: String },
    SignedIn { user_id: UserId },
    SignedOut,
}
