//! Workspace lifecycle status.

use super::ParseWorkspaceStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a workspace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum WorkspaceStatus {
    /// The runtime is being started.
    Starting,
    /// The runtime is up and its machines are reachable.
    Running,
    /// The runtime is shutting down.
    Stopping,
    /// No runtime exists.
    #[default]
    Stopped,
}

impl WorkspaceStatus {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::Running => "running",
            Self::Stopping => "stopping",
            Self::Stopped => "stopped",
        }
    }

    /// Returns whether the workspace is running.
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

impl fmt::Display for WorkspaceStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for WorkspaceStatus {
    type Error = ParseWorkspaceStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "starting" => Ok(Self::Starting),
            "running" => Ok(Self::Running),
            "stopping" => Ok(Self::Stopping),
            "stopped" => Ok(Self::Stopped),
            _ => Err(ParseWorkspaceStatusError(value.to_owned())),
        }
    }
}

impl TryFrom<String> for WorkspaceStatus {
    type Error = ParseWorkspaceStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("running", WorkspaceStatus::Running)]
    #[case("RUNNING", WorkspaceStatus::Running)]
    #[case(" Stopped ", WorkspaceStatus::Stopped)]
    #[case("starting", WorkspaceStatus::Starting)]
    #[case("STOPPING", WorkspaceStatus::Stopping)]
    fn parses_status_case_insensitively(#[case] raw: &str, #[case] expected: WorkspaceStatus) {
        assert_eq!(WorkspaceStatus::try_from(raw), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_status() {
        assert_eq!(
            WorkspaceStatus::try_from("paused"),
            Err(ParseWorkspaceStatusError("paused".to_owned()))
        );
    }

    #[rstest]
    fn only_running_is_running() {
        assert!(WorkspaceStatus::Running.is_running());
        assert!(!WorkspaceStatus::Starting.is_running());
        assert!(!WorkspaceStatus::default().is_running());
    }
}
