use crate::client::paths;

/// Whether a 401 from an endpoint means "session rejected" or "bad input".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Login and registration: a 401 is a business error (bad credentials).
    Public,
    /// Everything else: a 401 means the presented credential was rejected.
    Credentialed,
}

impl Access {
    pub fn for_path(path: &str) -> Self {
        match path {
            paths::LOGIN | paths::REGISTER => Access::Public,
            _ => Access::Credentialed,
        }
    }
}
