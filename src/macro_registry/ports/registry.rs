//! Registry port for macro registration and lookup.

use crate::macro_registry::domain::SharedMacro;
use std::sync::Arc;
use thiserror::Error;

/// Result type for macro registry operations.
pub type MacroRegistryResult<T> = Result<T, MacroRegistryError>;

/// Storage contract for registered macros.
#[cfg_attr(test, mockall::automock)]
pub trait MacroRegistry: Send + Sync {
    /// Registers every macro in `macros` in one call.
    ///
    /// # Errors
    ///
    /// Returns [`MacroRegistryError`] when the backing store fails.
    fn register(&self, macros: &[SharedMacro]) -> MacroRegistryResult<()>;

    /// Unregisters a single macro.
    ///
    /// # Errors
    ///
    /// Returns [`MacroRegistryError`] when the backing store fails.
    fn unregister(&self, entry: &SharedMacro) -> MacroRegistryResult<()>;

    /// Finds a macro by name.
    ///
    /// # Errors
    ///
    /// Returns [`MacroRegistryError`] when the backing store fails.
    fn get(&self, name: &str) -> MacroRegistryResult<Option<SharedMacro>>;

    /// Returns the names of all registered macros.
    ///
    /// # Errors
    ///
    /// Returns [`MacroRegistryError`] when the backing store fails.
    fn names(&self) -> MacroRegistryResult<Vec<String>>;
}

/// Errors returned by macro registry implementations.
#[derive(Debug, Clone, Error)]
pub enum MacroRegistryError {
    /// Backing store failure.
    #[error("macro registry error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl MacroRegistryError {
    /// Wraps a backing store failure.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
