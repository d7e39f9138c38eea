//! Server address macros for a workspace's development machine.
//!
//! When the workspace runs, every server exposed by the development machine
//! is published as a macro named `${server.port.<reference>}` that resolves to
//! the server's external URL. Servers whose reference ends in `/tcp` are also
//! published under the bare port (`${server.port.8080}`). Stopping the
//! workspace withdraws exactly the macros published for that run.
//!
//! - Domain types in [`domain`]
//! - Configuration in [`config`]
//! - The event-driven registrar in [`services`]

pub mod config;
pub mod domain;
pub mod services;
