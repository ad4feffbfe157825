use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] sk_config::ConfigError),

    #[error("{0}")]
    Session(#[from] sk_session::SessionError),

    #[error("Invalid argument: {0}")]
    Argument(#[from] sk_core::CoreError),

    #[error("Error serializing response: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Request body is not valid JSON: {source} {location}")]
    Body {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn body(source: serde_json::Error) -> Self {
        Self::Body {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
