//! HS256 JWT implementation of the token service port.
//!
//! Tokens embed the user's id as `sub` with issue and expiry instants.
//! Nothing is persisted server-side; possession of an unexpired, correctly
//! signed token is the whole session model.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::ports::{SessionToken, TokenService, TokenServiceError};
use crate::domain::UserId;

/// Default token lifetime, matching the original deployment's one hour.
const DEFAULT_TTL_SECS: i64 = 3600;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Signs and validates HS256 session tokens.
pub struct JwtTokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl JwtTokenService {
    /// Build a signer around a shared secret with an explicit token lifetime.
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Build a signer with the default one-hour lifetime.
    pub fn with_default_ttl(secret: &[u8]) -> Self {
        Self::new(secret, Duration::seconds(DEFAULT_TTL_SECS))
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: &UserId) -> Result<SessionToken, TokenServiceError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map(SessionToken::new)
            .map_err(|err| TokenServiceError::signing(err.to_string()))
    }

    fn verify(&self, token: &str) -> Result<UserId, TokenServiceError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map_err(|err| TokenServiceError::verification(err.to_string()))?;
        UserId::new(&data.claims.sub)
            .map_err(|err| TokenServiceError::verification(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn issued_token_verifies_to_same_user() {
        let service = JwtTokenService::with_default_ttl(b"test-secret");
        let id = UserId::random();

        let token = service.issue(&id).expect("signing succeeds");
        let recovered = service.verify(token.as_str()).expect("verification succeeds");
        assert_eq!(recovered, id);
    }

    #[test]
    fn token_from_other_secret_is_rejected() {
        let signer = JwtTokenService::with_default_ttl(b"secret-a");
        let verifier = JwtTokenService::with_default_ttl(b"secret-b");
        let token = signer.issue(&UserId::random()).expect("signing succeeds");

        let err = verifier.verify(token.as_str()).expect_err("must reject");
        assert!(matches!(err, TokenServiceError::Verification { .. }));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Lifetime far enough in the past to clear the default 60s leeway.
        let service = JwtTokenService::new(b"test-secret", Duration::seconds(-120));
        let token = service.issue(&UserId::random()).expect("signing succeeds");

        let err = service.verify(token.as_str()).expect_err("must reject");
        assert!(matches!(err, TokenServiceError::Verification { .. }));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let service = JwtTokenService::with_default_ttl(b"test-secret");
        let err = service.verify("not-a-token").expect_err("must reject");
        assert!(matches!(err, TokenServiceError::Verification { .. }));
    }
}
