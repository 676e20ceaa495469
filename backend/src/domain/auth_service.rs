//! Authentication controller: register, login, and profile use-cases.
//!
//! Each operation is a single-pass validate → lookup/compare → act → respond
//! sequence over the two collaborator ports. Expected failures (validation,
//! conflict, bad credentials, missing profile) are produced here with fixed
//! client-facing messages; anything unexpected from a collaborator is caught
//! at the operation boundary and converted into an internal error carrying a
//! generic message plus the collaborator's text as diagnostics.

use std::fmt::Display;
use std::sync::Arc;

use crate::domain::auth::{Identity, LoginCredentials, RegistrationDetails};
use crate::domain::error::Error;
use crate::domain::ports::{SessionToken, TokenService, UserStore, UserStoreError};
use crate::domain::user::User;
use crate::domain::ApiResult;

/// Fixed message for duplicate-email registration attempts.
pub const EMAIL_IN_USE_MESSAGE: &str = "Email already in use";
/// Fixed message for failed logins. Identical whether the email is unknown
/// or the password is wrong, so responses never reveal which emails exist.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid Credentials";
/// Fixed message for profile lookups that match no user.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Generic 500 message for registration failures.
pub const REGISTER_FAILURE_MESSAGE: &str = "Error registering user";
/// Generic 500 message for login failures.
pub const LOGIN_FAILURE_MESSAGE: &str = "Error logging in user";
/// Generic 500 message for profile lookup failures.
pub const PROFILE_FAILURE_MESSAGE: &str = "Error fetching user profile";

/// Successful authentication outcome: the user plus a freshly signed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    user: User,
    token: SessionToken,
}

impl AuthenticatedSession {
    /// The authenticated user's client-facing record.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// The signed session token issued for this user.
    pub fn token(&self) -> &SessionToken {
        &self.token
    }

    /// Split into user and token.
    pub fn into_parts(self) -> (User, SessionToken) {
        (self.user, self.token)
    }
}

/// The authentication controller over the user store and token service.
///
/// Stateless: holds no per-request data, so one instance serves every
/// request concurrently. Concurrent registrations with the same email remain
/// a race the pre-creation check cannot fully close; the store's uniqueness
/// backstop is authoritative and surfaces here as a conflict.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    tokens: Arc<dyn TokenService>,
}

impl AuthService {
    /// Build a controller over the given collaborator ports.
    pub fn new(store: Arc<dyn UserStore>, tokens: Arc<dyn TokenService>) -> Self {
        Self { store, tokens }
    }

    /// Register a new account and issue its first session token.
    ///
    /// Fails with a conflict if the email already resolves to a user; in
    /// that case no user is created and no token is issued.
    pub async fn register(&self, details: RegistrationDetails) -> ApiResult<AuthenticatedSession> {
        let existing = self
            .store
            .find_by_email(details.email())
            .await
            .map_err(register_failure)?;
        if existing.is_some() {
            return Err(Error::conflict(EMAIL_IN_USE_MESSAGE));
        }

        let user = match self.store.create(&details).await {
            Ok(user) => user,
            // A concurrent registration can win between the check and the
            // create; the store's uniqueness constraint reports it here.
            Err(UserStoreError::DuplicateEmail { .. }) => {
                return Err(Error::conflict(EMAIL_IN_USE_MESSAGE))
            }
            Err(err) => return Err(register_failure(err)),
        };

        let token = self.tokens.issue(user.id()).map_err(register_failure)?;
        Ok(AuthenticatedSession { user, token })
    }

    /// Authenticate an existing account and issue a session token.
    pub async fn login(&self, credentials: LoginCredentials) -> ApiResult<AuthenticatedSession> {
        let record = self
            .store
            .find_by_email(credentials.email())
            .await
            .map_err(login_failure)?;

        // Unknown email and wrong password collapse into the same outcome.
        let Some(record) = record else {
            return Err(Error::invalid_credentials(INVALID_CREDENTIALS_MESSAGE));
        };
        let matches = self
            .store
            .verify_password(record.credential(), credentials.password())
            .await
            .map_err(login_failure)?;
        if !matches {
            return Err(Error::invalid_credentials(INVALID_CREDENTIALS_MESSAGE));
        }

        let user = record.into_user();
        let token = self.tokens.issue(user.id()).map_err(login_failure)?;
        Ok(AuthenticatedSession { user, token })
    }

    /// Return the authenticated caller's profile, without credential data.
    pub async fn profile(&self, identity: &Identity) -> ApiResult<User> {
        self.store
            .find_by_id(identity.id())
            .await
            .map_err(profile_failure)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND_MESSAGE))
    }
}

fn register_failure(err: impl Display) -> Error {
    Error::internal(REGISTER_FAILURE_MESSAGE).with_detail(err.to_string())
}

fn login_failure(err: impl Display) -> Error {
    Error::internal(LOGIN_FAILURE_MESSAGE).with_detail(err.to_string())
}

fn profile_failure(err: impl Display) -> Error {
    Error::internal(PROFILE_FAILURE_MESSAGE).with_detail(err.to_string())
}
