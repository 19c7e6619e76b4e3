//! Error handling for the FinTrack Rust client

use std::fmt;
use thiserror::Error;

/// Unified error type for the FinTrack Rust client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP related errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// No user matched the supplied username/password pair
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The server has no record for the requested id
    #[error("not found: {0}")]
    NotFound(String),

    /// A required field was missing or empty; checked before any network call
    #[error("validation error: {0}")]
    Validation(String),

    /// Reading or writing the persisted session failed
    #[error("session error: {0}")]
    Session(String),

    /// The server answered with a non-success status other than 404
    #[error("API error: status {status}: {message}")]
    Api {
        /// The HTTP status code
        status: u16,
        /// The response body, verbatim
        message: String,
    },
}

impl Error {
    /// Create a new not-found error
    pub fn not_found<T: fmt::Display>(what: T) -> Self {
        Error::NotFound(what.to_string())
    }

    /// Create a new validation error
    pub fn validation<T: fmt::Display>(msg: T) -> Self {
        Error::Validation(msg.to_string())
    }

    /// Create a new session error
    pub fn session<T: fmt::Display>(msg: T) -> Self {
        Error::Session(msg.to_string())
    }

    /// Create a new API error from a status code and response body
    pub fn api<T: fmt::Display>(status: u16, message: T) -> Self {
        Error::Api {
            status,
            message: message.to_string(),
        }
    }
}
