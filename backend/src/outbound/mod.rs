//! Outbound (driven) adapters implementing the domain ports.

pub mod persistence;
pub mod token;
