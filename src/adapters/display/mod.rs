//! Display adapters - implementations of the OutputDisplay port.

mod in_memory;

pub use in_memory::InMemoryOutputDisplay;
