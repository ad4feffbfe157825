use crate::CredentialPair;

use serde::Deserialize;

/// Token payload returned by login, register and refresh.
#[derive(Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl From<TokenResponse> for CredentialPair {
    fn from(response: TokenResponse) -> Self {
        CredentialPair {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
        }
    }
}
