//! Domain model for template-expansion macros.

mod definition;

pub use definition::{Macro, SharedMacro, is_same_macro};
