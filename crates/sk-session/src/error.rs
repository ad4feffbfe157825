use sk_client::ClientError;
use sk_core::CoreError;
use sk_store::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors returned by session controller operations
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("{source} {location}")]
    Client {
        location: ErrorLocation,
        #[source]
        source: ClientError,
    },

    #[error("Token store error: {source} {location}")]
    Store {
        location: ErrorLocation,
        #[source]
        source: StoreError,
    },

    #[error("Invalid input: {source} {location}")]
    Validation {
        location: ErrorLocation,
        #[source]
        source: CoreError,
    },

    #[error("Not authenticated {location}")]
    NotAuthenticated { location: ErrorLocation },

    /// A logout or invalidation happened while the operation was in flight.
    #[error("Session changed while the operation was in flight {location}")]
    Superseded { location: ErrorLocation },
}

impl SessionError {
    #[track_caller]
    pub fn not_authenticated() -> Self {
        Self::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn superseded() -> Self {
        Self::Superseded {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when the failure detector already reset the session.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::Client { source, .. } if source.is_session_expired())
    }
}

impl From<ClientError> for SessionError {
    #[track_caller]
    fn from(source: ClientError) -> Self {
        Self::Client {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

impl From<StoreError> for SessionError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

impl From<CoreError> for SessionError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Validation {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
