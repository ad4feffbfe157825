use crate::{SessionContext, SessionError, SessionResult};

use sk_client::ApiClient;
use sk_config::{ApiConfig, Config, SessionConfig};
use sk_core::{
    CoreError, CredentialPair, RegisterRequest, SessionEvent, SessionState, User, UserUpdate,
};
use sk_store::{FileTokenStore, SharedTokenStore};

use std::sync::Arc;

use log::{error, info, warn};
use tokio::sync::{Mutex, broadcast, watch};

/// Owns the authentication lifecycle: credential pair, current user and state.
///
/// Remote operations are serialized; `logout` is synchronous and may run at
/// any time, in which case the in-flight operation fails with
/// [`SessionError::Superseded`].
pub struct SessionController {
    context: Arc<SessionContext>,
    client: ApiClient,
    store: SharedTokenStore,
    op_lock: Mutex<()>,
}

impl SessionController {
    pub fn new(
        api: &ApiConfig,
        session: &SessionConfig,
        store: SharedTokenStore,
    ) -> SessionResult<Self> {
        let context = Arc::new(SessionContext::new(session.login_path.clone()));
        let client = ApiClient::from_config(api, session, Arc::clone(&store), context.clone())?;

        Ok(Self {
            context,
            client,
            store,
            op_lock: Mutex::new(()),
        })
    }

    /// Controller backed by the token file under the config directory
    pub fn from_config(config: &Config) -> SessionResult<Self> {
        let store: SharedTokenStore = Arc::new(FileTokenStore::new(config.token_path()));
        Self::new(&config.api, &config.session, store)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> SessionState {
        self.context.state()
    }

    pub fn current_user(&self) -> Option<User> {
        self.context.state().user().cloned()
    }

    pub fn subscribe_state(&self) -> watch::Receiver<SessionState> {
        self.context.subscribe_state()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<SessionEvent> {
        self.context.subscribe_events()
    }

    /// Authorized API client sharing this session's store and detector
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Validate stored credentials against the API.
    ///
    /// Never fails: anything that prevents fetching the user discards the
    /// stored pair and leaves the session unauthenticated.
    pub async fn initialize(&self) -> SessionState {
        let _op = self.op_lock.lock().await;
        let epoch = self.context.epoch();
        self.context.set_state(SessionState::Initializing);

        let pair = match self.store.get() {
            Ok(pair) => pair,
            Err(e) => {
                warn!("Stored credentials unreadable: {e}");
                return self.discard_credentials(epoch);
            }
        };

        if pair.is_none() {
            info!("No stored credentials");
            self.context
                .commit_if_current(epoch, SessionState::Unauthenticated);
            return self.context.state();
        }

        match self.client.current_user().await {
            Ok(user) => {
                let user_id = user.id.clone();
                if self
                    .context
                    .commit_if_current(epoch, SessionState::Authenticated(user))
                {
                    info!("Session restored for user {user_id}");
                } else {
                    self.clear_quietly();
                }
            }
            // Recovery already cleared the store and reset the state
            Err(e) if e.is_session_expired() => {
                info!("Stored credentials rejected");
            }
            Err(e) => {
                warn!("Could not validate stored credentials: {e}");
                return self.discard_credentials(epoch);
            }
        }

        self.context.state()
    }

    /// Exchange email and password for a session.
    pub async fn login(&self, email: &str, password: &str) -> SessionResult<User> {
        let _op = self.op_lock.lock().await;
        let epoch = self.context.epoch();

        let pair = self.client.login(email, password).await?;
        self.establish(epoch, pair).await
    }

    /// Create an account and sign in as it.
    pub async fn register(&self, registration: &RegisterRequest) -> SessionResult<User> {
        registration.validate()?;

        let _op = self.op_lock.lock().await;
        let epoch = self.context.epoch();

        let pair = self.client.register(registration).await?;
        self.establish(epoch, pair).await
    }

    /// Sign out locally. Never contacts the API.
    pub fn logout(&self) -> SessionState {
        self.context.advance_epoch();

        let state = match self.store.clear() {
            Ok(()) => SessionState::Unauthenticated,
            Err(e) => {
                error!("Could not remove stored credentials: {e}");
                SessionState::Error {
                    message: format!("Signed out, but {}", e.remedy()),
                }
            }
        };

        self.context.set_state(state.clone());
        self.context.emit(SessionEvent::SignedOut);
        info!("Signed out");

        state
    }

    /// Rotate the stored credential pair. The current user is unchanged.
    pub async fn refresh(&self) -> SessionResult<CredentialPair> {
        let _op = self.op_lock.lock().await;
        let epoch = self.context.epoch();

        let current = self
            .store
            .get()?
            .ok_or_else(SessionError::not_authenticated)?;

        let pair = self.client.refresh(&current.refresh_token).await?;

        if self.context.epoch() != epoch {
            return Err(SessionError::superseded());
        }
        self.store.set(&pair)?;
        if self.context.epoch() != epoch {
            self.clear_quietly();
            return Err(SessionError::superseded());
        }

        info!("Credentials refreshed");
        Ok(pair)
    }

    /// Send a partial profile and adopt the server's full response.
    pub async fn update_user(&self, update: &UserUpdate) -> SessionResult<User> {
        if update.is_empty() {
            return Err(CoreError::validation("Nothing to update").into());
        }

        let _op = self.op_lock.lock().await;
        let epoch = self.context.epoch();

        if !self.context.state().is_authenticated() {
            return Err(SessionError::not_authenticated());
        }

        let user = match self.client.update_profile(update).await {
            Ok(user) => user,
            Err(e) => {
                if self.context.epoch() != epoch {
                    self.clear_quietly();
                }
                return Err(e.into());
            }
        };

        if !self
            .context
            .commit_if_current(epoch, SessionState::Authenticated(user.clone()))
        {
            self.clear_quietly();
            return Err(SessionError::superseded());
        }

        info!("Profile updated for user {}", user.id);
        Ok(user)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Store a freshly issued pair, fetch its user and commit both.
    ///
    /// On failure the previous pair is put back, unless the new pair was
    /// rejected outright, in which case recovery already ended the session.
    async fn establish(&self, epoch: u64, pair: CredentialPair) -> SessionResult<User> {
        let previous = self.store.get()?;
        self.store.set(&pair)?;

        let user = match self.client.current_user().await {
            Ok(user) => user,
            Err(e) => {
                if self.context.epoch() != epoch {
                    self.clear_quietly();
                } else if !e.is_session_expired() {
                    self.restore(previous.as_ref());
                }
                return Err(e.into());
            }
        };

        if !self
            .context
            .commit_if_current(epoch, SessionState::Authenticated(user.clone()))
        {
            self.clear_quietly();
            return Err(SessionError::superseded());
        }

        info!("Signed in as user {}", user.id);
        self.context.emit(SessionEvent::SignedIn {
            user_id: user.id.clone(),
        });

        Ok(user)
    }

    fn restore(&self, previous: Option<&CredentialPair>) {
        let result = match previous {
            Some(pair) => self.store.set(pair),
            None => self.store.clear(),
        };

        if let Err(e) = result {
            error!("Could not restore previous credentials: {e}");
            self.context.set_state(SessionState::Error {
                message: format!("Stored credentials are inconsistent: {e}"),
            });
        }
    }

    fn clear_quietly(&self) {
        if let Err(e) = self.store.clear() {
            error!("Could not remove superseded credentials: {e}");
        }
    }

    fn discard_credentials(&self, epoch: u64) -> SessionState {
        let state = match self.store.clear() {
            Ok(()) => SessionState::Unauthenticated,
            Err(e) => {
                error!("Could not remove stored credentials: {e}");
                SessionState::Error {
                    message: format!("Stored credentials could not be removed: {e}"),
                }
            }
        };

        self.context.commit_if_current(epoch, state);
        self.context.state()
    }
}
