//! Adapter implementations for the application context port.

mod memory;

pub use memory::InMemoryAppContext;
