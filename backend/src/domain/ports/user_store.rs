//! Driven port for user persistence and credential verification.
//!
//! The store owns password hashing: `create` receives the plaintext exactly
//! once and persists only a hash, and `verify_password` compares a candidate
//! against the opaque stored material. The controller never inspects hash
//! contents.

use async_trait::async_trait;

use crate::domain::auth::RegistrationDetails;
use crate::domain::user::{EmailAddress, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user store adapters.
    pub enum UserStoreError {
        /// Store connection could not be established or was lost.
        Connection { message: String } => "user store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user store query failed: {message}",
        /// Store-level uniqueness backstop rejected a duplicate email.
        DuplicateEmail { email: String } => "email already registered: {email}",
    }
}

/// Opaque password-verification material held by a stored user.
///
/// The hashing scheme is an adapter concern; this type only ferries the
/// material between `find_by_email` and `verify_password`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredential(String);

impl StoredCredential {
    /// Wrap adapter-produced hash material.
    pub fn new(material: impl Into<String>) -> Self {
        Self(material.into())
    }

    /// Expose the material to the adapter that produced it.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

/// A user together with the credential needed to verify a login attempt.
#[derive(Debug, Clone)]
pub struct UserRecord {
    user: User,
    credential: StoredCredential,
}

impl UserRecord {
    /// Pair a user with its stored credential.
    pub fn new(user: User, credential: StoredCredential) -> Self {
        Self { user, credential }
    }

    /// The user's client-facing attributes.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Opaque verification material.
    pub fn credential(&self) -> &StoredCredential {
        &self.credential
    }

    /// Discard the credential and keep the user.
    pub fn into_user(self) -> User {
        self.user
    }
}

/// Port over the persistence service backing authentication.
///
/// Lookups, creation, and credential comparison are the only operations the
/// controller needs; substituting a test double keeps controller tests free
/// of I/O.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a user and its credential by unique email.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserRecord>, UserStoreError>;

    /// Fetch a user by identifier, without credential material.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError>;

    /// Persist a new user, hashing the supplied plaintext password.
    async fn create(&self, details: &RegistrationDetails) -> Result<User, UserStoreError>;

    /// Compare a candidate password against stored credential material.
    async fn verify_password(
        &self,
        credential: &StoredCredential,
        candidate: &str,
    ) -> Result<bool, UserStoreError>;
}
