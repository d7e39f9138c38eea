//! Domain model for server address macros.

mod address_macro;
mod error;
mod generation;
mod template;

pub use address_macro::{ServerAddressMacro, server_address_macro};
pub use error::ServerMacroConfigError;
pub use generation::MacroGeneration;
pub use template::{DEFAULT_MACRO_NAME_TEMPLATE, MacroNameTemplate, NAME_PLACEHOLDER};
