use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure to read, write or remove the persisted credential pair.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Cannot read {path}: {source} {location}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    /// Covers directory creation, the temp file and the final rename.
    #[error("Cannot write {path}: {source} {location}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Cannot remove {path}: {source} {location}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Cannot move corrupted token file {path} aside: {source} {location}")]
    Quarantine {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Cannot encode credentials: {source} {location}")]
    Encode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn remove(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Remove {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn quarantine(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Quarantine {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// File the failure concerns, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. }
            | Self::Write { path, .. }
            | Self::Remove { path, .. }
            | Self::Quarantine { path, .. } => Some(path),
            Self::Encode { .. } => None,
        }
    }

    /// What the user can do about it. Shown when logout leaves a file behind.
    pub fn remedy(&self) -> &'static str {
        match self {
            Self::Read { .. } => "check the permissions of the token file",
            Self::Write { .. } | Self::Quarantine { .. } => {
                "check free space and permissions of the config directory"
            }
            Self::Remove { .. } => "delete the token file by hand to finish signing out",
            Self::Encode { .. } => "this is a bug, please report it",
        }
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
