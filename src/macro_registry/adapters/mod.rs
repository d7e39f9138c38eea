//! Adapter implementations for the macro registry port.

mod memory;

pub use memory::InMemoryMacroRegistry;
