//! Macro capability, registry port, and text expansion.
//!
//! Macros are named placeholders such as `${server.port.8080}` that resolve to
//! a value. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Expansion services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
