//! In-memory macro registry.

use crate::macro_registry::{
    domain::{SharedMacro, is_same_macro},
    ports::{MacroRegistry, MacroRegistryError, MacroRegistryResult},
};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

/// Thread-safe in-memory registry keyed by macro name.
///
/// The first macro registered under a name wins; later registrations of the
/// same name are ignored with a warning. Unregistering only removes the entry
/// when it is the same instance that was registered, so a stale handle never
/// evicts a newer macro of the same name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMacroRegistry {
    state: Arc<RwLock<BTreeMap<String, SharedMacro>>>,
}

impl InMemoryMacroRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_state(
        &self,
    ) -> MacroRegistryResult<RwLockReadGuard<'_, BTreeMap<String, SharedMacro>>> {
        self.state
            .read()
            .map_err(|err| MacroRegistryError::backend(std::io::Error::other(err.to_string())))
    }

    fn write_state(
        &self,
    ) -> MacroRegistryResult<RwLockWriteGuard<'_, BTreeMap<String, SharedMacro>>> {
        self.state
            .write()
            .map_err(|err| MacroRegistryError::backend(std::io::Error::other(err.to_string())))
    }
}

impl MacroRegistry for InMemoryMacroRegistry {
    fn register(&self, macros: &[SharedMacro]) -> MacroRegistryResult<()> {
        let mut state = self.write_state()?;
        for entry in macros {
            if state.contains_key(entry.name()) {
                warn!(name = entry.name(), "macro is already registered");
                continue;
            }
            state.insert(entry.name().to_owned(), Arc::clone(entry));
        }
        Ok(())
    }

    fn unregister(&self, entry: &SharedMacro) -> MacroRegistryResult<()> {
        let mut state = self.write_state()?;
        let owned = state
            .get(entry.name())
            .is_some_and(|stored| is_same_macro(stored, entry));
        if owned {
            state.remove(entry.name());
        } else {
            debug!(name = entry.name(), "ignoring unregister of unknown macro instance");
        }
        Ok(())
    }

    fn get(&self, name: &str) -> MacroRegistryResult<Option<SharedMacro>> {
        Ok(self.read_state()?.get(name).cloned())
    }

    fn names(&self) -> MacroRegistryResult<Vec<String>> {
        Ok(self.read_state()?.keys().cloned().collect())
    }
}
