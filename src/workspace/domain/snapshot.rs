//! Point-in-time view of a workspace.

use super::{Machine, WorkspaceDomainError, WorkspaceStatus};
use serde::{Deserialize, Serialize};

/// Workspace identity, status and optional development machine.
///
/// The JSON form follows the workspace runtime description:
///
/// ```json
/// {
///   "id": "workspace42",
///   "status": "RUNNING",
///   "devMachine": {
///     "name": "dev-machine",
///     "servers": { "8080/tcp": { "url": "http://host:32768" } }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSnapshot {
    id: String,
    #[serde(default)]
    status: WorkspaceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dev_machine: Option<Machine>,
}

impl WorkspaceSnapshot {
    /// Creates a snapshot with no development machine.
    #[must_use]
    pub fn new(id: impl Into<String>, status: WorkspaceStatus) -> Self {
        Self {
            id: id.into(),
            status,
            dev_machine: None,
        }
    }

    /// Decodes a snapshot from its JSON runtime description.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::InvalidDescription`] when the JSON is
    /// malformed or contains invalid values.
    pub fn from_json(json: &str) -> Result<Self, WorkspaceDomainError> {
        serde_json::from_str(json)
            .map_err(|err| WorkspaceDomainError::InvalidDescription(err.to_string()))
    }

    /// Sets the development machine.
    #[must_use]
    pub fn with_dev_machine(mut self, machine: Machine) -> Self {
        self.dev_machine = Some(machine);
        self
    }

    /// Returns the workspace identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the workspace status.
    #[must_use]
    pub const fn status(&self) -> WorkspaceStatus {
        self.status
    }

    /// Returns the development machine, if the runtime has one.
    #[must_use]
    pub const fn dev_machine(&self) -> Option<&Machine> {
        self.dev_machine.as_ref()
    }

    /// Updates the workspace status.
    pub const fn set_status(&mut self, status: WorkspaceStatus) {
        self.status = status;
    }

    /// Replaces or clears the development machine.
    pub fn set_dev_machine(&mut self, machine: Option<Machine>) {
        self.dev_machine = machine;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn decodes_runtime_description() {
        let snapshot = WorkspaceSnapshot::from_json(
            r#"{
                "id": "workspace42",
                "status": "RUNNING",
                "devMachine": {
                    "name": "dev-machine",
                    "servers": {
                        "8080/tcp": { "url": "http://host:32768" },
                        "wsagent/http": { "url": "http://host:9000" }
                    }
                }
            }"#,
        )
        .expect("valid description");

        assert_eq!(snapshot.id(), "workspace42");
        assert_eq!(snapshot.status(), WorkspaceStatus::Running);
        let machine = snapshot.dev_machine().expect("dev machine");
        assert_eq!(machine.name(), "dev-machine");
        assert_eq!(machine.servers().len(), 2);
    }

    #[rstest]
    fn missing_machine_and_status_use_defaults() {
        let snapshot =
            WorkspaceSnapshot::from_json(r#"{"id": "workspace42"}"#).expect("valid description");

        assert_eq!(snapshot.status(), WorkspaceStatus::Stopped);
        assert!(snapshot.dev_machine().is_none());
    }

    #[rstest]
    #[case(r#"{"id": "w", "status": "paused"}"#)]
    #[case(r#"{"id": "w", "devMachine": {"servers": {"80/tcp": {"url": ""}}}}"#)]
    #[case(r#"{"id": "w", "devMachine": {"servers": {"": {"url": "http://host:1"}}}}"#)]
    #[case(r#"{"id": "w", "devMachine": {"servers": {" 9000/tcp ": {"url": "http://host:1"}}}}"#)]
    #[case("not json")]
    fn invalid_descriptions_are_rejected(#[case] json: &str) {
        assert!(matches!(
            WorkspaceSnapshot::from_json(json),
            Err(WorkspaceDomainError::InvalidDescription(_))
        ));
    }
}
