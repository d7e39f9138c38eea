//! Workspace state exposed by the IDE application context.
//!
//! The module models workspace status and the development machine with its
//! exposed servers:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
