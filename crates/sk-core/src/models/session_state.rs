//! Authentication phase of the session controller.

use crate::User;

/// Current session phase. A [`User`] exists only in `Authenticated`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    /// Transient, while stored credentials are validated at start-up.
    Initializing,
    Authenticated(User),
    /// Memory and durable storage disagree (e.g. credentials could not be removed).
    Error { message: String },
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Short name used in logs and CLI output
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Initializing => "initializing",
            Self::Authenticated(_) => "authenticated",
            Self::Error { .. } => "error",
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Authenticated(user) => write!(f, "authenticated as {}", user.email),
            Self::Error { message } => write!(f, "error: {message}"),
            other => write!(f, "{}", other.label()),
        }
    }
}
