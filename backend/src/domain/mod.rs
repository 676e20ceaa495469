//! Domain primitives and the authentication controller.
//!
//! Purpose: Define strongly typed domain entities used by the HTTP adapter
//! and the outbound adapters. Keep types immutable and document invariants
//! and serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode — API error response payload and its category.
//! - User, UserId, EmailAddress — user identity attributes.
//! - RegistrationDetails, LoginCredentials, Identity — validated request
//!   values consumed by the controller.
//! - AuthService — the register / login / profile decision logic.

pub mod auth;
pub mod auth_service;
pub mod error;
pub mod ports;
pub mod user;

pub use self::auth::{CredentialValidationError, Identity, LoginCredentials, RegistrationDetails};
pub use self::auth_service::{AuthService, AuthenticatedSession};
pub use self::error::{Error, ErrorCode};
pub use self::user::{EmailAddress, FullName, User, UserId, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("User not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
