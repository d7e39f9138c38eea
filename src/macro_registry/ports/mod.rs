//! Port contracts for macro registration and lookup.

mod registry;

#[cfg(test)]
pub use registry::MockMacroRegistry;
pub use registry::{MacroRegistry, MacroRegistryError, MacroRegistryResult};
