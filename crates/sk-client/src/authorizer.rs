use log::warn;
use reqwest::RequestBuilder;
use sk_store::SharedTokenStore;

/// Pre-send hook attaching the stored access token as a bearer credential.
#[derive(Clone)]
pub struct RequestAuthorizer {
    store: SharedTokenStore,
}

impl RequestAuthorizer {
    pub fn new(store: SharedTokenStore) -> Self {
        Self { store }
    }

    /// Access token to present, if any. Storage failures degrade to "none".
    pub fn current_token(&self) -> Option<String> {
        match self.store.access_token() {
            Ok(token) => token,
            Err(e) => {
                warn!("Token store unreadable, sending request without credentials: {e}");
                None
            }
        }
    }

    /// Attach `Authorization: Bearer <token>` when a token is stored.
    ///
    /// Returns the request and the token it carries.
    pub fn authorize(&self, request: RequestBuilder) -> (RequestBuilder, Option<String>) {
        match self.current_token() {
            Some(token) => (request.bearer_auth(&token), Some(token)),
            None => (request, None),
        }
    }
}
