//! In-memory application context.

use crate::workspace::{
    domain::{Machine, WorkspaceSnapshot, WorkspaceStatus},
    ports::{AppContext, AppContextError, AppContextResult},
};
use std::sync::{Arc, RwLock, RwLockWriteGuard};

/// Thread-safe in-memory application context holding one workspace.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAppContext {
    state: Arc<RwLock<WorkspaceSnapshot>>,
}

impl InMemoryAppContext {
    /// Creates a context exposing `workspace`.
    #[must_use]
    pub fn new(workspace: WorkspaceSnapshot) -> Self {
        Self {
            state: Arc::new(RwLock::new(workspace)),
        }
    }

    fn write_state(&self) -> AppContextResult<RwLockWriteGuard<'_, WorkspaceSnapshot>> {
        self.state
            .write()
            .map_err(|err| AppContextError::unavailable(std::io::Error::other(err.to_string())))
    }

    /// Replaces the whole workspace snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AppContextError`] when lock acquisition fails.
    pub fn set_workspace(&self, workspace: WorkspaceSnapshot) -> AppContextResult<()> {
        *self.write_state()? = workspace;
        Ok(())
    }

    /// Updates the workspace status.
    ///
    /// # Errors
    ///
    /// Returns [`AppContextError`] when lock acquisition fails.
    pub fn set_status(&self, status: WorkspaceStatus) -> AppContextResult<()> {
        self.write_state()?.set_status(status);
        Ok(())
    }

    /// Replaces or clears the development machine.
    ///
    /// # Errors
    ///
    /// Returns [`AppContextError`] when lock acquisition fails.
    pub fn set_dev_machine(&self, machine: Option<Machine>) -> AppContextResult<()> {
        self.write_state()?.set_dev_machine(machine);
        Ok(())
    }
}

impl AppContext for InMemoryAppContext {
    fn workspace(&self) -> AppContextResult<WorkspaceSnapshot> {
        let state = self
            .state
            .read()
            .map_err(|err| AppContextError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(state.clone())
    }
}
