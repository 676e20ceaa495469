//! User store adapters.

mod memory;

pub use memory::InMemoryUserStore;
