//! Session lifecycle on top of the authorized API client.
//!
//! [`SessionController`] drives login, registration, refresh and logout.
//! [`SessionContext`] holds the observable state and publishes
//! [`SessionEvent`](sk_core::SessionEvent)s, including the redirect signal
//! raised when the API rejects the stored credentials.

mod error;
mod session_context;
mod session_controller;


pub use error::{Result as SessionResult, SessionError};
pub use session_context::SessionContext;
pub use session_controller::SessionController;
