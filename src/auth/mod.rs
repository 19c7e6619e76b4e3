//! Sign-in and session management for the FinTrack API
//!
//! The backend has no real authentication endpoint: sign-in fetches the full
//! `/users` collection and scans it for an exact username/password match,
//! mirroring the demo backend's behavior. A real deployment should verify
//! credentials server-side and treat this client as a relay.

mod session;
mod types;

use std::sync::{Arc, Mutex};

use reqwest::Client;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;

pub use session::*;
pub use types::*;

/// Session context for the FinTrack client.
///
/// Holds the in-memory current user and the optional on-disk store. The
/// session is never consulted ambiently: callers restore it explicitly with
/// [`Auth::restore`] and clear it with [`Auth::sign_out`].
pub struct Auth {
    /// The base URL of the FinTrack API
    base_url: String,

    /// HTTP client used for requests
    client: Client,

    /// The signed-in user, if any
    session: Arc<Mutex<Option<User>>>,

    /// On-disk persistence; `None` when persistence is disabled or no
    /// session path could be resolved
    store: Option<SessionStore>,
}

impl Auth {
    /// Create a new Auth client
    pub(crate) fn new(base_url: &str, client: Client, options: &ClientOptions) -> Self {
        let store = if options.persist_session {
            let path = options
                .session_path
                .clone()
                .or_else(SessionStore::default_path);
            match path {
                Some(path) => Some(SessionStore::new(path)),
                None => {
                    tracing::warn!("no home directory; session will not be persisted");
                    None
                }
            }
        } else {
            None
        };

        Self {
            base_url: base_url.to_string(),
            client,
            session: Arc::new(Mutex::new(None)),
            store,
        }
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    /// Sign in with a username and password.
    ///
    /// Empty fields fail with [`Error::Validation`] before any network call.
    /// Otherwise the full user collection is fetched and scanned for an
    /// exact match; the first matching user is stored as the current session
    /// and persisted when persistence is enabled. No match fails with
    /// [`Error::InvalidCredentials`].
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<User, Error> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(Error::validation("username and password are required"));
        }

        tracing::debug!(username, "attempting sign-in");

        let users = Fetch::get(&self.client, &self.users_url())
            .execute::<Vec<User>>()
            .await?;

        let user = users
            .into_iter()
            .find(|user| user.username == username && user.password == password)
            .ok_or(Error::InvalidCredentials)?;

        if let Some(store) = &self.store {
            store.save(&user)?;
        }

        let mut current = self.session.lock().unwrap();
        *current = Some(user.clone());

        tracing::debug!(user_id = %user.id, "sign-in succeeded");
        Ok(user)
    }

    /// Sign in with a captured credentials pair
    pub async fn sign_in_with_credentials(&self, credentials: &Credentials) -> Result<User, Error> {
        self.sign_in(&credentials.username, &credentials.password)
            .await
    }

    /// Sign out the current user, clearing both the in-memory session and
    /// the persisted file
    pub fn sign_out(&self) -> Result<(), Error> {
        let mut current = self.session.lock().unwrap();
        *current = None;
        drop(current);

        if let Some(store) = &self.store {
            store.clear()?;
        }

        Ok(())
    }

    /// Load the persisted session, if any, into the current session slot
    /// and return it
    pub fn restore(&self) -> Result<Option<User>, Error> {
        let user = match &self.store {
            Some(store) => store.load()?,
            None => None,
        };

        let mut current = self.session.lock().unwrap();
        *current = user.clone();

        Ok(user)
    }

    /// Get the current signed-in user without touching the disk
    pub fn current_user(&self) -> Option<User> {
        let current = self.session.lock().unwrap();
        current.clone()
    }
}
