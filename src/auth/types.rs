//! Types for sign-in and session management

use serde::{Deserialize, Serialize};

/// A user record as stored by the backend.
///
/// The demo backend keeps passwords in plaintext and returns them with the
/// user collection; the field is carried here for the client-side credential
/// scan and must not be treated as a security boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// The user ID
    pub id: String,

    /// The login name
    pub username: String,

    /// The plaintext password, as stored by the demo backend
    pub password: String,

    /// The creation time
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// A username/password pair captured from the login form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// The login name
    pub username: String,

    /// The password
    pub password: String,
}
