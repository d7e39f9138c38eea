//! Services built on the macro registry port.

mod expander;

pub use expander::MacroExpander;
