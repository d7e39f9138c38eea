//! Domain model for workspace runtime state.
//!
//! A workspace has a lifecycle status and, while it runs, an optional
//! development machine that exposes servers keyed by reference such as
//! `8080/tcp` or `wsagent/http`.

mod error;
mod machine;
mod snapshot;
mod status;

pub use error::{ParseWorkspaceStatusError, WorkspaceDomainError};
pub use machine::{Machine, ServerDescriptor};
pub use snapshot::WorkspaceSnapshot;
pub use status::WorkspaceStatus;
