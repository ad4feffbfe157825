use serde::Serialize;

/// Body of `POST /auth/refresh`
#[derive(Debug, Clone, Serialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}
