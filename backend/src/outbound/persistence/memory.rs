//! In-memory user store with Argon2id password hashing.
//!
//! Backs local runs and tests. Plaintext passwords cross this boundary once,
//! on `create`, and only the resulting hash string is retained. Email
//! uniqueness is re-checked under the write lock, making this adapter the
//! authoritative backstop for the register race the controller's
//! check-then-create sequence cannot close.

use std::collections::HashMap;
use std::sync::RwLock;

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{StoredCredential, UserRecord, UserStore, UserStoreError};
use crate::domain::user::{EmailAddress, User, UserId};
use crate::domain::RegistrationDetails;

struct StoredEntry {
    user: User,
    credential: StoredCredential,
}

/// Thread-safe in-memory [`UserStore`] implementation.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, StoredEntry>>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn hash_password(password: &str) -> Result<String, UserStoreError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| UserStoreError::query(format!("password hashing failed: {err}")))
    }
}

const LOCK_POISONED: &str = "user store lock poisoned";

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserRecord>, UserStoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| UserStoreError::connection(LOCK_POISONED))?;
        Ok(users
            .values()
            .find(|entry| entry.user.email() == email)
            .map(|entry| UserRecord::new(entry.user.clone(), entry.credential.clone())))
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| UserStoreError::connection(LOCK_POISONED))?;
        Ok(users.get(id.as_uuid()).map(|entry| entry.user.clone()))
    }

    async fn create(&self, details: &RegistrationDetails) -> Result<User, UserStoreError> {
        let hash = Self::hash_password(details.password())?;

        let mut users = self
            .users
            .write()
            .map_err(|_| UserStoreError::connection(LOCK_POISONED))?;
        // Uniqueness backstop: re-check now that we hold the write lock.
        if users
            .values()
            .any(|entry| entry.user.email() == details.email())
        {
            return Err(UserStoreError::duplicate_email(details.email().as_ref()));
        }

        let user = User::new(
            UserId::random(),
            details.full_name().clone(),
            details.email().clone(),
            details.profile_image_url().map(str::to_owned),
        );
        users.insert(
            *user.id().as_uuid(),
            StoredEntry {
                user: user.clone(),
                credential: StoredCredential::new(hash),
            },
        );
        Ok(user)
    }

    async fn verify_password(
        &self,
        credential: &StoredCredential,
        candidate: &str,
    ) -> Result<bool, UserStoreError> {
        let parsed = PasswordHash::new(credential.expose())
            .map_err(|err| UserStoreError::query(format!("stored credential unreadable: {err}")))?;
        match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(err) => Err(UserStoreError::query(format!(
                "password verification failed: {err}"
            ))),
        }
    }
}
