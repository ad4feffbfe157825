mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

const APP_DIR_NAME: &str = "session-keeper";
const FALLBACK_CONFIG_DIR: &str = ".sk";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOGIN_PATH: &str = "/login";
const DEFAULT_TOKEN_FILE: &str = "tokens.json";
const DEFAULT_AUTO_REFRESH: bool = false;
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
