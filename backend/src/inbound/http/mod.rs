//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod error;
pub mod health;
pub mod identity;
pub mod state;

pub use crate::domain::ApiResult;
