//! Authentication request values.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to the controller.
//! Plaintext passwords are wrapped in [`Zeroizing`] so they are wiped when
//! the request value is dropped.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::user::{EmailAddress, FullName, UserId, UserValidationError};

/// Domain error returned when register/login payload values are invalid.
///
/// The HTTP adapter collapses every variant into one fixed client response;
/// the variants exist so logs and tests can tell the failures apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialValidationError {
    /// Full name was missing or blank once trimmed.
    EmptyFullName,
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFullName => write!(f, "full name must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

impl From<UserValidationError> for CredentialValidationError {
    fn from(value: UserValidationError) -> Self {
        match value {
            UserValidationError::EmptyFullName => Self::EmptyFullName,
            // Ids never surface through request payload validation.
            UserValidationError::EmptyEmail | UserValidationError::InvalidId => Self::EmptyEmail,
        }
    }
}

/// Validated registration input.
///
/// ## Invariants
/// - `full_name` and `email` are trimmed and non-empty.
/// - `password` is non-empty but retains caller-provided whitespace to avoid
///   surprising credential comparisons.
/// - `profile_image_url` is optional and passed through untouched.
#[derive(Debug, Clone)]
pub struct RegistrationDetails {
    full_name: FullName,
    email: EmailAddress,
    password: Zeroizing<String>,
    profile_image_url: Option<String>,
}

impl RegistrationDetails {
    /// Construct registration details from raw request inputs.
    pub fn try_from_parts(
        full_name: &str,
        email: &str,
        password: &str,
        profile_image_url: Option<&str>,
    ) -> Result<Self, CredentialValidationError> {
        let full_name = FullName::new(full_name)?;
        let email = EmailAddress::new(email)?;
        if password.is_empty() {
            return Err(CredentialValidationError::EmptyPassword);
        }

        Ok(Self {
            full_name,
            email,
            password: Zeroizing::new(password.to_owned()),
            profile_image_url: profile_image_url.map(str::to_owned),
        })
    }

    /// Name shown on the new user's profile.
    pub fn full_name(&self) -> &FullName {
        &self.full_name
    }

    /// Unique login identifier for the new user.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Plaintext password; the store hashes it before persisting.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Optional avatar location.
    pub fn profile_image_url(&self) -> Option<&str> {
        self.profile_image_url.as_deref()
    }
}

/// Validated login credentials.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialValidationError> {
        let email = EmailAddress::new(email)?;
        if password.is_empty() {
            return Err(CredentialValidationError::EmptyPassword);
        }

        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email string suitable for user lookups.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password candidate provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Principal attached to an already-authenticated request.
///
/// Produced by the bearer-token extractor and consumed by the profile
/// operation, so handlers pass identity explicitly instead of reading
/// ambient request state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    id: UserId,
}

impl Identity {
    /// Wrap an authenticated user id.
    pub fn new(id: UserId) -> Self {
        Self { id }
    }

    /// The authenticated user's id.
    pub fn id(&self) -> &UserId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "a@b.c", "pw", CredentialValidationError::EmptyFullName)]
    #[case("   ", "a@b.c", "pw", CredentialValidationError::EmptyFullName)]
    #[case("Ada", "", "pw", CredentialValidationError::EmptyEmail)]
    #[case("Ada", "a@b.c", "", CredentialValidationError::EmptyPassword)]
    fn invalid_registration_inputs(
        #[case] full_name: &str,
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: CredentialValidationError,
    ) {
        let err = RegistrationDetails::try_from_parts(full_name, email, password, None)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("", "pw", CredentialValidationError::EmptyEmail)]
    #[case("  ", "pw", CredentialValidationError::EmptyEmail)]
    #[case("a@b.c", "", CredentialValidationError::EmptyPassword)]
    fn invalid_login_inputs(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: CredentialValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(email, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[test]
    fn valid_registration_trims_name_and_email_but_not_password() {
        let details =
            RegistrationDetails::try_from_parts(" Test User ", " test@example.com ", " pw ", None)
                .expect("valid inputs should succeed");
        assert_eq!(details.full_name().as_ref(), "Test User");
        assert_eq!(details.email().as_ref(), "test@example.com");
        assert_eq!(details.password(), " pw ");
        assert!(details.profile_image_url().is_none());
    }

    #[test]
    fn profile_image_url_is_passed_through() {
        let details = RegistrationDetails::try_from_parts("Ada", "ada@example.com", "pw", Some("url"))
            .expect("valid inputs should succeed");
        assert_eq!(details.profile_image_url(), Some("url"));
    }
}
