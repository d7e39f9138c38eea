//! Development machine and the servers it exposes.

use super::WorkspaceDomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Externally reachable server exposed by a machine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawServerDescriptor")]
pub struct ServerDescriptor {
    url: String,
}

#[derive(Deserialize)]
struct RawServerDescriptor {
    url: String,
}

impl TryFrom<RawServerDescriptor> for ServerDescriptor {
    type Error = WorkspaceDomainError;

    fn try_from(raw: RawServerDescriptor) -> Result<Self, Self::Error> {
        Self::new(raw.url)
    }
}

impl ServerDescriptor {
    /// Creates a server descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::EmptyServerUrl`] when the URL is empty
    /// after trimming.
    pub fn new(url: impl Into<String>) -> Result<Self, WorkspaceDomainError> {
        let normalized = url.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(WorkspaceDomainError::EmptyServerUrl);
        }
        Ok(Self { url: normalized })
    }

    /// Returns the external URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Machine hosting the workspace's development tooling.
///
/// Servers are keyed by their reference (`8080/tcp`, `wsagent/http`) and kept
/// in lexicographic order. References are used verbatim: empty or
/// whitespace-padded references are rejected rather than rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMachine")]
pub struct Machine {
    name: String,
    servers: BTreeMap<String, ServerDescriptor>,
}

#[derive(Deserialize)]
struct RawMachine {
    #[serde(default)]
    name: String,
    #[serde(default)]
    servers: BTreeMap<String, ServerDescriptor>,
}

impl TryFrom<RawMachine> for Machine {
    type Error = WorkspaceDomainError;

    fn try_from(raw: RawMachine) -> Result<Self, Self::Error> {
        raw.servers
            .into_iter()
            .try_fold(Self::new(raw.name), |machine, (reference, server)| {
                machine.with_server(reference, server)
            })
    }
}

impl Machine {
    /// Creates a machine with no servers.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            servers: BTreeMap::new(),
        }
    }

    /// Adds or replaces a server.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::EmptyServerReference`] when the
    /// reference is empty, or
    /// [`WorkspaceDomainError::PaddedServerReference`] when it has leading or
    /// trailing whitespace.
    pub fn with_server(
        mut self,
        reference: impl Into<String>,
        server: ServerDescriptor,
    ) -> Result<Self, WorkspaceDomainError> {
        let raw = reference.into();
        if raw.is_empty() {
            return Err(WorkspaceDomainError::EmptyServerReference);
        }
        if raw.trim() != raw {
            return Err(WorkspaceDomainError::PaddedServerReference(raw));
        }
        self.servers.insert(raw, server);
        Ok(self)
    }

    /// Returns the machine name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns all servers keyed by reference.
    #[must_use]
    pub const fn servers(&self) -> &BTreeMap<String, ServerDescriptor> {
        &self.servers
    }

    /// Finds a server by reference.
    #[must_use]
    pub fn server(&self, reference: &str) -> Option<&ServerDescriptor> {
        self.servers.get(reference)
    }
}
