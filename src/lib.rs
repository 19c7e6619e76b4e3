//! FinTrack Rust Client Library
//!
//! A Rust client library for the FinTrack personal finance API, providing
//! expense CRUD against the remote collection, username/password sign-in with
//! a locally persisted session, and client-side analytics over fetched
//! expense records.

pub mod analytics;
pub mod auth;
pub mod config;
pub mod error;
pub mod expenses;
pub mod fetch;

use reqwest::Client;

use crate::auth::Auth;
use crate::config::ClientOptions;
use crate::expenses::ExpensesClient;

/// The main entry point for the FinTrack Rust client
pub struct FinTrack {
    /// The base URL of the FinTrack API
    pub base_url: String,
    /// HTTP client used for requests
    pub http_client: Client,
    /// Auth client for sign-in and session management
    pub auth: Auth,
    /// Client options
    pub options: ClientOptions,
}

impl FinTrack {
    /// Create a new FinTrack client
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the FinTrack API
    ///
    /// # Example
    ///
    /// ```
    /// use fintrack_rust::FinTrack;
    ///
    /// let fintrack = FinTrack::new("https://api.example.com/api/v1");
    /// ```
    pub fn new(base_url: &str) -> Self {
        Self::new_with_options(base_url, ClientOptions::default())
    }

    /// Create a new FinTrack client with custom options
    ///
    /// # Example
    ///
    /// ```
    /// use fintrack_rust::{config::ClientOptions, FinTrack};
    ///
    /// let options = ClientOptions::default().with_persist_session(false);
    /// let fintrack = FinTrack::new_with_options("https://api.example.com/api/v1", options);
    /// ```
    pub fn new_with_options(base_url: &str, options: ClientOptions) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().unwrap_or_else(|_| Client::new());

        let base_url = base_url.trim_end_matches('/').to_string();
        let auth = Auth::new(&base_url, http_client.clone(), &options);

        Self {
            base_url,
            http_client,
            auth,
            options,
        }
    }

    /// Get a reference to the auth client for sign-in and session management
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Create a new ExpensesClient for operations on the expense collection
    ///
    /// # Example
    ///
    /// ```
    /// use fintrack_rust::FinTrack;
    ///
    /// let fintrack = FinTrack::new("https://api.example.com/api/v1");
    /// let expenses = fintrack.expenses();
    /// ```
    pub fn expenses(&self) -> ExpensesClient {
        ExpensesClient::new(&self.base_url, self.http_client.clone())
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::analytics::{summarize, ExpenseSummary};
    pub use crate::config::ClientOptions;
    pub use crate::error::Error;
    pub use crate::FinTrack;
}
