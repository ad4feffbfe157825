pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::credential_pair::CredentialPair;
pub use models::experience_level::ExperienceLevel;
pub use models::login_request::LoginRequest;
pub use models::refresh_request::RefreshRequest;
pub use models::register_request::RegisterRequest;
pub use models::session_event::SessionEvent;
pub use models::session_state::SessionState;
pub use models::token_response::TokenResponse;
pub use models::user::User;
pub use models::user_id::UserId;
pub use models::user_update::UserUpdate;

/// Storage key of the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key of the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
