//! The current-user entity held by the session controller.

use crate::{ExperienceLevel, UserId};

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// User as returned by `GET /auth/me` and `PUT /auth/profile`.
///
/// Never persisted locally; rebuilt from the API on every start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    /// Kept verbatim; servers emit both zoned and naive ISO-8601 timestamps.
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<BTreeSet<String>>,
    #[serde(
        default,
        deserialize_with = "ExperienceLevel::deserialize_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub experience_level: Option<ExperienceLevel>,
}

fn default_is_active() -> bool {
    true
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
