//! Domain-level error type.
//!
//! Transport agnostic: the HTTP adapter maps [`ErrorCode`] onto status codes
//! and serialises [`Error`] as the wire-level `{"message", "error"?}` body.
//! The `error` field carries collaborator diagnostics and is only populated
//! for internal failures; every other variant ships a fixed, non-leaking
//! message.

use serde::Serialize;
use utoipa::ToSchema;

/// Stable machine-readable category describing the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// Email/password pair did not match a stored credential. Deliberately
    /// covers both "no such user" and "wrong password".
    InvalidCredentials,
    /// A uniqueness invariant would be violated (duplicate email).
    Conflict,
    /// Authentication is missing or the presented token is invalid.
    Unauthorized,
    /// The requested resource does not exist.
    NotFound,
    /// An unexpected failure from a collaborator.
    InternalError,
}

/// API error payload.
///
/// ## Invariants
/// - `message` is a fixed client-facing text; collaborator detail never leaks
///   into it.
/// - `detail` is present only on [`ErrorCode::InternalError`] values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Error {
    #[serde(skip)]
    code: ErrorCode,
    #[schema(example = "Invalid Credentials")]
    message: String,
    #[serde(rename = "error", skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl Error {
    /// Create a new error with the given category and client-facing message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            detail: None,
        }
    }

    /// Stable machine-readable error category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Client-facing message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Low-level diagnostic detail, populated on internal failures.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Attach collaborator diagnostics to the error.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidCredentials`].
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidCredentials, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
