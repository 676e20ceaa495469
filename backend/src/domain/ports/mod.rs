//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod token_service;
mod user_store;

#[cfg(test)]
pub use token_service::MockTokenService;
pub use token_service::{SessionToken, TokenService, TokenServiceError};
#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::{StoredCredential, UserRecord, UserStore, UserStoreError};
