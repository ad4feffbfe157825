//! Token store persisted as a small JSON document.
//!
//! File location: `<config_dir>/tokens.json`, an object keyed by
//! `access_token` and `refresh_token`.
//!
//! ## Corruption
//!
//! A file that cannot be parsed, or that lacks either key, is treated as
//! "no session". It is renamed to `tokens.json.corrupted.<timestamp>` so the
//! next login starts from a clean slate.

use crate::{StoreError, StoreResult, TokenStore};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use sk_core::CredentialPair;
use tempfile::NamedTempFile;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Durable [`TokenStore`] backed by a single file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renames a corrupted token file out of the way.
    fn backup_corrupted(&self) -> StoreResult<PathBuf> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("tokens.json"));
        let backup_path = self
            .path
            .with_file_name(format!("{file_name}.corrupted.{timestamp}"));

        fs::rename(&self.path, &backup_path)
            .map_err(|e| StoreError::quarantine(&self.path, e))?;

        warn!("Backed up corrupted token file to {backup_path:?}");
        Ok(backup_path)
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> StoreResult<Option<CredentialPair>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No token file at {:?}", self.path);
                return Ok(None);
            }
            Err(e) => return Err(StoreError::read(&self.path, e)),
        };

        match serde_json::from_str::<CredentialPair>(&contents) {
            Ok(pair) => Ok(Some(pair)),
            Err(e) => {
                warn!("Token file corrupted at {:?}: {e}", self.path);
                self.backup_corrupted()?;
                Ok(None)
            }
        }
    }

    /// Saves the pair using the atomic write pattern.
    ///
    /// 1. Writes to a uniquely named temp file in the same directory
    ///    (owner-only on unix)
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    fn set(&self, pair: &CredentialPair) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| StoreError::write(dir, e))?;

        let json = serde_json::to_vec_pretty(pair)?;

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| StoreError::write(dir, e))?;
        temp.write_all(&json)
            .map_err(|e| StoreError::write(temp.path(), e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| StoreError::write(temp.path(), e))?;

        // A failed persist drops (and deletes) the temp file
        temp.persist(&self.path)
            .map_err(|e| StoreError::write(&self.path, e.error))?;

        info!("Saved credentials to {:?}", self.path);
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Removed credentials at {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::remove(&self.path, e)),
        }
    }
}
