use crate::{MemoryTokenStore, SharedTokenStore, TokenStore};

use std::sync::Arc;

use sk_core::CredentialPair;

#[test]
fn test_new_store_is_empty() {
    let store = MemoryTokenStore::new();
    assert!(store.get().unwrap().is_none());
    assert!(store.access_token().unwrap().is_none());
}

#[test]
fn test_with_pair_is_seeded() {
    let store = MemoryTokenStore::with_pair(CredentialPair::new("AT1", "RT1"));
    assert_eq!(store.access_token().unwrap().as_deref(), Some("AT1"));
}

#[test]
fn test_set_and_clear_through_shared_handle() {
    let store: SharedTokenStore = Arc::new(MemoryTokenStore::new());
    let other = Arc::clone(&store);

    store.set(&CredentialPair::new("AT1", "RT1")).unwrap();
    assert_eq!(other.get().unwrap(), Some(CredentialPair::new("AT1", "RT1")));

    other.clear().unwrap();
    other.clear().unwrap();
    assert!(store.get().unwrap().is_none());
}
