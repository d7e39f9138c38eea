//! Server address macros for IDE workspaces.
//!
//! This crate publishes one template-expansion macro per server exposed by a
//! workspace's development machine. Each macro resolves to the server's
//! externally reachable URL, so command lines such as
//! `curl ${server.port.8080}` can be expanded against the running workspace.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for collaborators
//! - **Adapters**: In-memory implementations of ports
//! - **Services**: Orchestration on top of the ports
//!
//! # Modules
//!
//! - [`events`]: Typed synchronous dispatch of IDE lifecycle events
//! - [`workspace`]: Workspace status, development machine, and app context
//! - [`macro_registry`]: Macro capability, registry port, and expansion
//! - [`server_macros`]: Registrar bridging lifecycle events to the registry

pub mod events;
pub mod macro_registry;
pub mod server_macros;
pub mod workspace;
