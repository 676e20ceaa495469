//! User data model.
//!
//! The store owns persistence of these attributes; this module only enforces
//! the shape the controller relies on. Email *format* policing is the store's
//! concern, so [`EmailAddress`] rejects blank input and nothing else.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors returned by the user type constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// User id was empty or not a UUID.
    InvalidId,
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Full name was missing or blank once trimmed.
    EmptyFullName,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyFullName => write!(f, "full name must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let parsed =
            Uuid::parse_str(id.as_ref().trim()).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self(parsed))
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Email address used as the unique login identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let trimmed = email.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        Ok(Self(trimmed))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Human readable name shown on the user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FullName(String);

impl FullName {
    /// Validate and construct a [`FullName`].
    pub fn new(full_name: impl Into<String>) -> Result<Self, UserValidationError> {
        let trimmed = full_name.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyFullName);
        }
        Ok(Self(trimmed))
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<FullName> for String {
    fn from(value: FullName) -> Self {
        value.0
    }
}

impl TryFrom<String> for FullName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Application user, as returned to clients.
///
/// ## Invariants
/// - `id` is a valid UUID.
/// - `email` is unique across all users; the controller re-checks this before
///   creation and the store backstops it.
/// - Never carries password material: credentials live behind the user store
///   port and stay out of every serialised payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: UserId,
    #[schema(value_type = String, example = "Test User")]
    full_name: FullName,
    #[schema(value_type = String, example = "test@example.com")]
    email: EmailAddress,
    #[schema(value_type = Option<String>, example = "https://cdn.example.com/avatar.png")]
    profile_image_url: Option<String>,
}

impl User {
    /// Build a new [`User`] from validated components.
    pub fn new(
        id: UserId,
        full_name: FullName,
        email: EmailAddress,
        profile_image_url: Option<String>,
    ) -> Self {
        Self {
            id,
            full_name,
            email,
            profile_image_url,
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Name shown on the profile.
    pub fn full_name(&self) -> &FullName {
        &self.full_name
    }

    /// Unique login identifier.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Optional avatar location.
    pub fn profile_image_url(&self) -> Option<&str> {
        self.profile_image_url.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    id: String,
    full_name: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile_image_url: Option<String>,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            id,
            full_name,
            email,
            profile_image_url,
        } = value;
        Self {
            id: id.to_string(),
            full_name: full_name.into(),
            email: email.into(),
            profile_image_url,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let UserDto {
            id,
            full_name,
            email,
            profile_image_url,
        } = value;
        Ok(User::new(
            UserId::new(id)?,
            FullName::new(full_name)?,
            EmailAddress::new(email)?,
            profile_image_url,
        ))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::{json, to_value};

    #[rstest]
    #[case("", UserValidationError::EmptyEmail)]
    #[case("   ", UserValidationError::EmptyEmail)]
    fn blank_email_is_rejected(#[case] input: &str, #[case] expected: UserValidationError) {
        assert_eq!(EmailAddress::new(input).expect_err("must fail"), expected);
    }

    #[rstest]
    #[case("not-a-uuid")]
    #[case("")]
    fn malformed_user_id_is_rejected(#[case] input: &str) {
        assert_eq!(
            UserId::new(input).expect_err("must fail"),
            UserValidationError::InvalidId
        );
    }

    #[test]
    fn user_serialises_camel_case_without_password_material() {
        let user = User::new(
            UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("id"),
            FullName::new("Test User").expect("name"),
            EmailAddress::new("test@example.com").expect("email"),
            Some("url".into()),
        );
        assert_eq!(
            to_value(&user).expect("serialise"),
            json!({
                "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                "fullName": "Test User",
                "email": "test@example.com",
                "profileImageUrl": "url",
            })
        );
    }

    #[test]
    fn user_round_trips_through_json() {
        let user = User::new(
            UserId::random(),
            FullName::new("Ada").expect("name"),
            EmailAddress::new("ada@example.com").expect("email"),
            None,
        );
        let encoded = serde_json::to_string(&user).expect("encode");
        let decoded: User = serde_json::from_str(&encoded).expect("decode");
        assert_eq!(decoded, user);
    }
}
