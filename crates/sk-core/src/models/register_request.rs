use crate::{CoreError, Result as CoreErrorResult};

use serde::Serialize;

/// Body of `POST /auth/register`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// Reject obviously incomplete registrations before they hit the network.
    pub fn validate(&self) -> CoreErrorResult<()> {
        for (field, value) in [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::validation(format!("{field} must not be empty")));
            }
        }

        if self.password.is_empty() {
            return Err(CoreError::validation("password must not be empty"));
        }

        Ok(())
    }
}
