//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain controller and ports, and remain testable without
//! real infrastructure.

use std::sync::Arc;

use crate::domain::ports::{TokenService, UserStore};
use crate::domain::AuthService;

/// Dependency bundle for HTTP handlers.
///
/// The token service is held separately from the controller so the bearer
/// identity extractor can verify presented tokens without routing through an
/// authentication operation.
#[derive(Clone)]
pub struct HttpState {
    /// The authentication controller.
    pub auth: AuthService,
    /// Token verification for the identity extractor.
    pub tokens: Arc<dyn TokenService>,
}

impl HttpState {
    /// Wire handler state from the two collaborator ports.
    pub fn new(store: Arc<dyn UserStore>, tokens: Arc<dyn TokenService>) -> Self {
        Self {
            auth: AuthService::new(store, Arc::clone(&tokens)),
            tokens,
        }
    }
}
