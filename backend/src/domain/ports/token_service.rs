//! Driven port for session token issuance and verification.
//!
//! Tokens are opaque signed strings encoding the user's id with an expiry;
//! nothing is stored server-side. Signing is CPU-bound so the port is
//! synchronous.

use std::fmt;

use crate::domain::user::UserId;

use super::define_port_error;

define_port_error! {
    /// Failures raised by token service adapters.
    pub enum TokenServiceError {
        /// The token could not be signed.
        Signing { message: String } => "token signing failed: {message}",
        /// The token was malformed, tampered with, or expired.
        Verification { message: String } => "token verification failed: {message}",
    }
}

/// Opaque signed session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap an adapter-produced token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The wire representation handed to clients.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Consume the wrapper, yielding the raw token string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port over the service that signs and validates session tokens.
#[cfg_attr(test, mockall::automock)]
pub trait TokenService: Send + Sync {
    /// Sign a fresh token embedding the user's id.
    fn issue(&self, user_id: &UserId) -> Result<SessionToken, TokenServiceError>;

    /// Validate a presented token and recover the embedded user id.
    fn verify(&self, token: &str) -> Result<UserId, TokenServiceError>;
}
