//! Gate catalog implementations.

mod memory;

pub use memory::InMemoryGateCatalog;
