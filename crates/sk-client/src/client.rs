use crate::{
    Access, ClientError, ClientResult, FailureDetector, InvalidationHook, RequestAuthorizer,
};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sk_config::{ApiConfig, SessionConfig};
use sk_core::{
    CredentialPair, LoginRequest, RefreshRequest, RegisterRequest, TokenResponse, User, UserUpdate,
};
use sk_store::SharedTokenStore;
use tokio::sync::Mutex;

/// Remote API routes consumed by the session layer.
pub mod paths {
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/auth/register";
    pub const ME: &str = "/auth/me";
    pub const PROFILE: &str = "/auth/profile";
    pub const REFRESH: &str = "/auth/refresh";
}

/// A request kept in replayable form so it can be re-sent after a refresh.
struct ApiRequest {
    method: Method,
    path: String,
    body: Option<Value>,
    access: Access,
}

impl ApiRequest {
    fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            body: None,
            access: Access::for_path(path),
        }
    }

    fn with_body<T: Serialize>(mut self, body: &T) -> ClientResult<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

enum RefreshOutcome {
    /// A newer pair is stored; replay the request.
    Rotated,
    /// No usable pair; fall through to recovery.
    Failed,
    /// The session was ended while refreshing; skip recovery.
    Abandoned,
}

/// HTTP client for the remote auth API
pub struct ApiClient {
    pub base_url: String,
    client: ReqwestClient,
    store: SharedTokenStore,
    authorizer: RequestAuthorizer,
    detector: FailureDetector,
    auto_refresh: bool,
    refresh_lock: Mutex<()>,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API URL (e.g., "http://localhost:8000")
    /// * `timeout` - Per-request timeout
    /// * `store` - Token store read by the authorizer and cleared by the detector
    /// * `hook` - Receives the invalidation signal on rejected credentials
    pub fn new(
        base_url: &str,
        timeout: Duration,
        store: SharedTokenStore,
        hook: Arc<dyn InvalidationHook>,
    ) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = ReqwestClient::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            authorizer: RequestAuthorizer::new(Arc::clone(&store)),
            detector: FailureDetector::new(Arc::clone(&store), hook),
            store,
            auto_refresh: false,
            refresh_lock: Mutex::new(()),
        })
    }

    pub fn from_config(
        api: &ApiConfig,
        session: &SessionConfig,
        store: SharedTokenStore,
        hook: Arc<dyn InvalidationHook>,
    ) -> ClientResult<Self> {
        Ok(Self::new(&api.base_url, api.timeout(), store, hook)?
            .with_auto_refresh(session.auto_refresh))
    }

    /// Refresh once and replay a request whose access token was rejected.
    pub fn with_auto_refresh(mut self, enabled: bool) -> Self {
        self.auto_refresh = enabled;
        self
    }

    pub fn auto_refresh(&self) -> bool {
        self.auto_refresh
    }

    pub fn store(&self) -> &SharedTokenStore {
        &self.store
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Exchange email/password for a credential pair. Does not store it.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<CredentialPair> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let request = ApiRequest::new(Method::POST, paths::LOGIN).with_body(&body)?;
        let tokens: TokenResponse = self.execute(request).await?;
        Ok(tokens.into())
    }

    /// Create an account and receive its first credential pair. Does not store it.
    pub async fn register(&self, registration: &RegisterRequest) -> ClientResult<CredentialPair> {
        let request = ApiRequest::new(Method::POST, paths::REGISTER).with_body(registration)?;
        let tokens: TokenResponse = self.execute(request).await?;
        Ok(tokens.into())
    }

    /// Exchange a refresh token for a new pair. Does not store it.
    pub async fn refresh(&self, refresh_token: &str) -> ClientResult<CredentialPair> {
        let body = RefreshRequest {
            refresh_token: refresh_token.to_string(),
        };
        let request = ApiRequest::new(Method::POST, paths::REFRESH).with_body(&body)?;
        let tokens: TokenResponse = self.execute(request).await?;
        Ok(tokens.into())
    }

    /// Fetch the user owning the stored access token
    pub async fn current_user(&self) -> ClientResult<User> {
        self.execute(ApiRequest::new(Method::GET, paths::ME)).await
    }

    /// Send a partial profile; returns the server's full representation
    pub async fn update_profile(&self, update: &UserUpdate) -> ClientResult<User> {
        let request = ApiRequest::new(Method::PUT, paths::PROFILE).with_body(update)?;
        self.execute(request).await
    }

    // =========================================================================
    // Generic Operations
    // =========================================================================

    /// Authorized GET for API calls the session layer does not model
    pub async fn get_json(&self, path: &str) -> ClientResult<Value> {
        self.execute(ApiRequest::new(Method::GET, path)).await
    }

    /// Authorized POST with a JSON body
    pub async fn post_json(&self, path: &str, body: &Value) -> ClientResult<Value> {
        self.send_json(Method::POST, path, body).await
    }

    /// Authorized PUT with a JSON body
    pub async fn put_json(&self, path: &str, body: &Value) -> ClientResult<Value> {
        self.send_json(Method::PUT, path, body).await
    }

    async fn send_json<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Value> {
        let request = ApiRequest::new(method, path).with_body(body)?;
        self.execute(request).await
    }

    // =========================================================================
    // Pipeline
    // =========================================================================

    /// Build, authorize and send a request. Returns the token it carried.
    async fn dispatch(&self, request: &ApiRequest) -> ClientResult<(Response, Option<String>)> {
        let url = format!("{}{}", self.base_url, request.path);
        let builder = self.client.request(request.method.clone(), &url);
        let (mut builder, token) = self.authorizer.authorize(builder);

        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        debug!(
            "{} {} -> {}",
            request.method,
            request.path,
            response.status()
        );

        Ok((response, token))
    }

    /// Send a request through the authorizer and the failure detector
    async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> ClientResult<T> {
        let (mut response, token) = self.dispatch(&request).await?;

        if self
            .detector
            .is_authorization_failure(response.status(), request.access)
        {
            if self.can_refresh(&request) {
                match self.refresh_after_rejection(token.as_deref()).await {
                    RefreshOutcome::Rotated => response = self.dispatch(&request).await?.0,
                    RefreshOutcome::Failed => {}
                    // Session already ended elsewhere; nothing left to recover
                    RefreshOutcome::Abandoned => {
                        return Err(ClientError::unauthorized(request.path));
                    }
                }
            }

            if self
                .detector
                .is_authorization_failure(response.status(), request.access)
            {
                self.detector.recover(&request.path);
                return Err(ClientError::unauthorized(request.path));
            }
        }

        Self::decode(response).await
    }

    fn can_refresh(&self, request: &ApiRequest) -> bool {
        self.auto_refresh && request.path != paths::REFRESH
    }

    /// Rotate the stored pair after `rejected` was refused.
    ///
    /// Serialized so concurrent rejections trigger a single refresh; a waiter
    /// that finds the token already rotated just retries with it. The new
    /// pair is only kept if the session was not ended while the refresh ran.
    async fn refresh_after_rejection(&self, rejected: Option<&str>) -> RefreshOutcome {
        let _guard = self.refresh_lock.lock().await;
        let epoch = self.detector.session_epoch();

        let pair = match self.store.get() {
            Ok(Some(pair)) => pair,
            Ok(None) if rejected.is_some() => {
                debug!("Credentials cleared since the request was sent");
                return RefreshOutcome::Abandoned;
            }
            Ok(None) => return RefreshOutcome::Failed,
            Err(e) => {
                warn!("Token store unreadable, cannot refresh: {e}");
                return RefreshOutcome::Failed;
            }
        };

        if rejected != Some(pair.access_token.as_str()) {
            debug!("Access token already rotated, retrying with the stored one");
            return RefreshOutcome::Rotated;
        }

        let request = match ApiRequest::new(Method::POST, paths::REFRESH).with_body(
            &RefreshRequest {
                refresh_token: pair.refresh_token,
            },
        ) {
            Ok(request) => request,
            Err(e) => {
                warn!("Could not build refresh request: {e}");
                return RefreshOutcome::Failed;
            }
        };

        let refreshed = match self.dispatch(&request).await {
            Ok((response, _)) => Self::decode::<TokenResponse>(response).await,
            Err(e) => Err(e),
        };

        let tokens = match refreshed {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!("Automatic refresh failed: {e}");
                return RefreshOutcome::Failed;
            }
        };

        if self.detector.session_epoch() != epoch {
            info!("Session ended during automatic refresh, discarding new tokens");
            return RefreshOutcome::Abandoned;
        }

        if let Err(e) = self.store.set(&tokens.into()) {
            warn!("Refreshed tokens could not be stored: {e}");
            return RefreshOutcome::Failed;
        }

        // A logout between the check and the write must not resurrect the pair
        if self.detector.session_epoch() != epoch {
            if let Err(e) = self.store.clear() {
                error!("Could not discard tokens refreshed after sign-out: {e}");
            }
            return RefreshOutcome::Abandoned;
        }

        info!("Access token refreshed after rejection");
        RefreshOutcome::Rotated
    }

    /// Decode a success body, or turn an error body into `ClientError::Api`
    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(Self::api_error(status, &bytes));
        }

        if bytes.is_empty() {
            return Ok(serde_json::from_slice(b"null")?);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Accepts `{"error": {"code", "message"}}`, `{"error": "..."}` and `{"detail": ...}` bodies.
    #[track_caller]
    fn api_error(status: StatusCode, bytes: &[u8]) -> ClientError {
        let body: Value = serde_json::from_slice(bytes).unwrap_or(Value::Null);
        let fallback_code = format!("HTTP_{}", status.as_u16());
        let fallback_message = status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string();

        let (code, message) = if let Some(error) = body.get("error") {
            match error.as_str() {
                Some(message) => (fallback_code, message.to_string()),
                None => (
                    error
                        .get("code")
                        .and_then(|v| v.as_str())
                        .map(String::from)
                        .unwrap_or(fallback_code),
                    error
                        .get("message")
                        .and_then(|v| v.as_str())
                        .map(String::from)
                        .unwrap_or(fallback_message),
                ),
            }
        } else if let Some(detail) = body.get("detail") {
            let message = detail
                .as_str()
                .map(String::from)
                .unwrap_or_else(|| detail.to_string());
            (fallback_code, message)
        } else {
            (fallback_code, fallback_message)
        };

        ClientError::api_error(status.as_u16(), code, message)
    }
}
