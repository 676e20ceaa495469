//! Bearer-token identity extraction.
//!
//! Stands in for the upstream authentication middleware: verifies the
//! `Authorization: Bearer` token via the token service port and hands the
//! handler an explicit [`Identity`] value instead of ambient request state.

use std::future::{ready, Ready};

use actix_web::http::header;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use tracing::warn;

use crate::domain::{Error, Identity};

use super::state::HttpState;

/// Authenticated principal extracted from the request's bearer token.
#[derive(Debug, Clone)]
pub struct RequestIdentity(Identity);

impl RequestIdentity {
    /// The verified principal.
    pub fn identity(&self) -> &Identity {
        &self.0
    }
}

fn extract(req: &HttpRequest) -> Result<RequestIdentity, Error> {
    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or_else(|| Error::internal("authentication state not configured"))?;

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| Error::unauthorized("authentication required"))?;

    let user_id = state.tokens.verify(token).map_err(|err| {
        warn!(error = %err, "rejected bearer token");
        Error::unauthorized("authentication required")
    })?;

    Ok(RequestIdentity(Identity::new(user_id)))
}

impl FromRequest for RequestIdentity {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract(req))
    }
}
