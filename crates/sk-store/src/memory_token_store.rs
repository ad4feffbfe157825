use crate::{StoreResult, TokenStore};

use std::sync::{Mutex, MutexGuard, PoisonError};

use sk_core::CredentialPair;

/// Process-local token store for tests and embedders that manage their own persistence.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    pair: Mutex<Option<CredentialPair>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a pair.
    pub fn with_pair(pair: CredentialPair) -> Self {
        Self {
            pair: Mutex::new(Some(pair)),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<CredentialPair>> {
        // A panic while holding the lock cannot leave a half-written pair.
        self.pair.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> StoreResult<Option<CredentialPair>> {
        Ok(self.slot().clone())
    }

    fn set(&self, pair: &CredentialPair) -> StoreResult<()> {
        *self.slot() = Some(pair.clone());
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        *self.slot() = None;
        Ok(())
    }
}
