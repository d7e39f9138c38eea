//! Error types for server macro configuration.

use thiserror::Error;

/// Errors returned while building server macro configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServerMacroConfigError {
    /// The name template does not contain exactly one `%` placeholder.
    #[error("macro name template '{0}' must contain exactly one '%' placeholder")]
    InvalidNameTemplate(String),

    /// The port alias suffix is empty.
    #[error("TCP suffix must not be empty")]
    EmptyTcpSuffix,

    /// The configuration document could not be decoded.
    #[error("invalid server macro configuration: {0}")]
    InvalidDocument(String),
}
