//! Application context port exposing the current workspace.

use crate::workspace::domain::WorkspaceSnapshot;
use std::sync::Arc;
use thiserror::Error;

/// Result type for application context reads.
pub type AppContextResult<T> = Result<T, AppContextError>;

/// Read access to the IDE's current workspace state.
pub trait AppContext: Send + Sync {
    /// Returns the current workspace snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AppContextError`] when the state cannot be read.
    fn workspace(&self) -> AppContextResult<WorkspaceSnapshot>;
}

/// Errors returned by application context adapters.
#[derive(Debug, Clone, Error)]
pub enum AppContextError {
    /// Workspace state is not available.
    #[error("workspace state unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl AppContextError {
    /// Wraps an adapter failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
