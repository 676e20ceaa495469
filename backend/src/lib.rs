//! Authentication backend for the expense tracker.
//!
//! The crate is organised hexagonally: `domain` holds transport-agnostic
//! types, the two collaborator ports, and the authentication controller;
//! `inbound::http` adapts Actix Web requests onto the controller; `outbound`
//! provides the driven adapters (user store, token signer).

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
