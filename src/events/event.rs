//! Lifecycle events raised by the IDE shell and workspace runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle event kinds. None of them carry a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdeEvent {
    /// The IDE finished its basic bootstrap.
    BasicIdeInitialized,
    /// The workspace runtime reached the running state.
    WorkspaceRunning,
    /// The workspace runtime stopped.
    WorkspaceStopped,
}

impl IdeEvent {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BasicIdeInitialized => "basic_ide_initialized",
            Self::WorkspaceRunning => "workspace_running",
            Self::WorkspaceStopped => "workspace_stopped",
        }
    }
}

impl fmt::Display for IdeEvent {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
