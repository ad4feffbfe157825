//! Durable storage for the session's credential pair.

mod error;
mod file_token_store;
mod memory_token_store;
mod token_store;

#[cfg(test)]
mod tests;

pub use error::{Result as StoreResult, StoreError};
pub use file_token_store::FileTokenStore;
pub use memory_token_store::MemoryTokenStore;
pub use token_store::{SharedTokenStore, TokenStore};
