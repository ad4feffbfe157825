use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTO_REFRESH, DEFAULT_LOGIN_PATH, DEFAULT_TOKEN_FILE,
};

use std::path::Path;

use serde::Deserialize;

/// Session lifecycle settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Where the UI is sent after the API rejects the session
    pub login_path: String,
    /// Try one refresh-then-retry before giving up on a rejected access token
    pub auto_refresh: bool,
    /// Token file, relative to the config dir
    pub token_file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            auto_refresh: DEFAULT_AUTO_REFRESH,
            token_file: DEFAULT_TOKEN_FILE.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.login_path.starts_with('/') {
            return Err(ConfigError::session(format!(
                "session.login_path must start with '/', got '{}'",
                self.login_path
            )));
        }

        let token_file = Path::new(&self.token_file);
        if self.token_file.is_empty()
            || token_file.is_absolute()
            || self.token_file.contains("..")
        {
            return Err(ConfigError::session(
                "session.token_file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
