use crate::{ApiClient, NoopInvalidationHook};

use std::sync::Arc;
use std::time::Duration;

use sk_config::{ApiConfig, SessionConfig};
use sk_store::MemoryTokenStore;

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(
        base_url,
        Duration::from_secs(5),
        Arc::new(MemoryTokenStore::new()),
        Arc::new(NoopInvalidationHook),
    )
    .unwrap()
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = client("http://localhost:8000/");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = client("http://localhost:8000");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_auto_refresh_disabled_by_default() {
    assert!(!client("http://localhost:8000").auto_refresh());
}

#[test]
fn test_from_config_applies_auto_refresh() {
    let session = SessionConfig {
        auto_refresh: true,
        ..Default::default()
    };

    let client = ApiClient::from_config(
        &ApiConfig::default(),
        &session,
        Arc::new(MemoryTokenStore::new()),
        Arc::new(NoopInvalidationHook),
    )
    .unwrap();

    assert!(client.auto_refresh());
    assert_eq!(client.base_url, "http://localhost:8000");
}
