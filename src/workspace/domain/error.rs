//! Error types for workspace domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing workspace domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkspaceDomainError {
    /// A server URL is empty after trimming.
    #[error("server URL must not be empty")]
    EmptyServerUrl,

    /// A server reference is empty.
    #[error("server reference must not be empty")]
    EmptyServerReference,

    /// A server reference has leading or trailing whitespace.
    #[error("server reference '{0}' must not have surrounding whitespace")]
    PaddedServerReference(String),

    /// A workspace runtime description could not be decoded.
    #[error("invalid workspace description: {0}")]
    InvalidDescription(String),
}

/// Error returned while parsing a workspace status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown workspace status: {0}")]
pub struct ParseWorkspaceStatusError(pub String);
