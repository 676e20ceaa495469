//! Token service adapters.

mod jwt;

pub use jwt::JwtTokenService;
