#![allow(dead_code)]

use sk_config::{ApiConfig, SessionConfig};
use sk_core::CredentialPair;
use sk_session::SessionController;
use sk_store::{MemoryTokenStore, SharedTokenStore};

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path},
};

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    }
}

pub fn controller(base_url: &str, store: SharedTokenStore) -> SessionController {
    SessionController::new(&api_config(base_url), &SessionConfig::default(), store).unwrap()
}

/// Controller that refreshes and replays once when an access token is rejected.
pub fn auto_refreshing_controller(base_url: &str, store: SharedTokenStore) -> SessionController {
    let session = SessionConfig {
        auto_refresh: true,
        ..SessionConfig::default()
    };
    SessionController::new(&api_config(base_url), &session, store).unwrap()
}

pub fn memory_store(pair: Option<CredentialPair>) -> Arc<MemoryTokenStore> {
    Arc::new(match pair {
        Some(pair) => MemoryTokenStore::with_pair(pair),
        None => MemoryTokenStore::new(),
    })
}

pub fn tokens(access: &str, refresh: &str) -> Value {
    json!({
        "access_token": access,
        "refresh_token": refresh,
        "token_type": "bearer"
    })
}

pub fn user_json() -> Value {
    json!({
        "id": 7,
        "email": "a@b.com",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "is_active": true,
        "created_at": "2024-01-01T00:00:00",
        "skills": ["rust"],
        "experience_level": "intermediate"
    })
}

/// `POST /auth/login` accepting password `pw` and issuing `AT1`/`RT1`.
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_string_contains("\"password\":\"pw\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(tokens("AT1", "RT1")))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Invalid email or password"
        })))
        .with_priority(10)
        .mount(server)
        .await;
}

/// `GET /auth/me` answering for `token`; everything else is rejected.
pub async fn mount_me(server: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .with_priority(10)
        .mount(server)
        .await;
}
