use crate::StoreResult;

use std::sync::Arc;

use sk_core::CredentialPair;

/// Persisted pair-of-strings holding at most one credential pair.
///
/// All operations are synchronous and idempotent. Implementations never
/// inspect token contents.
pub trait TokenStore: Send + Sync {
    /// Current pair, or `None` when unauthenticated.
    fn get(&self) -> StoreResult<Option<CredentialPair>>;

    /// Replace the stored pair.
    fn set(&self, pair: &CredentialPair) -> StoreResult<()>;

    /// Remove the stored pair. Succeeds when nothing is stored.
    fn clear(&self) -> StoreResult<()>;

    /// Access token only; what the request authorizer needs.
    fn access_token(&self) -> StoreResult<Option<String>> {
        Ok(self.get()?.map(|pair| pair.access_token))
    }
}

pub type SharedTokenStore = Arc<dyn TokenStore>;
