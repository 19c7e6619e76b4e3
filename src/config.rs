//! Configuration options for the FinTrack client

use std::path::PathBuf;
use std::time::Duration;

/// Configuration options for the FinTrack client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Whether to persist the signed-in user to disk
    pub persist_session: bool,

    /// The request timeout
    pub request_timeout: Option<Duration>,

    /// Where to persist the session; `None` uses the default location
    /// under the user's home directory
    pub session_path: Option<PathBuf>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            persist_session: true,
            request_timeout: Some(Duration::from_secs(30)),
            session_path: None,
        }
    }
}

impl ClientOptions {
    /// Set whether to persist the session
    pub fn with_persist_session(mut self, value: bool) -> Self {
        self.persist_session = value;
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set a custom path for the persisted session file
    pub fn with_session_path(mut self, value: PathBuf) -> Self {
        self.session_path = Some(value);
        self
    }
}
