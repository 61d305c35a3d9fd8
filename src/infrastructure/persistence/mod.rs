//! Store implementations of the domain repository traits.

pub mod memory_registry;

pub use memory_registry::InMemoryRegistry;
