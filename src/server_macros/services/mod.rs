//! Application services for server address macros.

mod registrar;

pub use registrar::{
    RegistrarError, RegistrarResult, RegistrySupplier, ServerAddressMacroRegistrar,
};
