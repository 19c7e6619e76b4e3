//! Persistence for the signed-in user
//!
//! One identity is kept as a JSON file at a fixed path. There is no
//! encryption and no expiry: the file is a durability convenience so the
//! user stays signed in across runs, not a security boundary.

use std::fs;
use std::path::PathBuf;

use crate::auth::types::User;
use crate::error::Error;

/// File-backed store for the single persisted session
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Path of the session file
    path: PathBuf,
}

impl SessionStore {
    /// Create a store backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The default session file location under the user's home directory,
    /// or `None` when no home directory can be resolved
    pub fn default_path() -> Option<PathBuf> {
        home::home_dir().map(|dir| dir.join(".fintrack").join("session.json"))
    }

    /// Persist the user, overwriting any prior session
    pub fn save(&self, user: &User) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(Error::session)?;
        }

        let json = serde_json::to_string(user)?;
        fs::write(&self.path, json).map_err(Error::session)?;

        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    /// Load the previously saved user, or `None` when no session is present.
    ///
    /// An unreadable or corrupt session file degrades to `None` rather than
    /// failing the caller; the stale file is left for the next `save` to
    /// overwrite.
    pub fn load(&self) -> Result<Option<User>, Error> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(Error::session(err)),
        };

        match serde_json::from_str(&json) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "discarding unreadable session file");
                Ok(None)
            }
        }
    }

    /// Remove the persisted session, succeeding if it was already absent
    pub fn clear(&self) -> Result<(), Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Error::session(err)),
        }
    }
}
