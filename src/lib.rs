// file: src/lib.rs
// version: 1.0.0
// guid: 3b9e1d70-6f24-4c8a-a5d3-0e7c2f9b4a18

//! # sui-cli-bridge
//!
//! Process invocation and output normalization for the `sui` blockchain
//! client and the `walrus` storage client.
//!
//! Front-ends build an [`Invocation`](executor::Invocation), hand it to a
//! shared [`CommandRunner`](executor::CommandRunner) and get back trimmed
//! text, or an [`ExternalCommand`](BridgeError::ExternalCommand) error that
//! carries the tool's own diagnostics verbatim. Programs are always started
//! directly with a discrete argument array, never through a shell.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod parser;
pub mod security;

pub use error::{BridgeError, Result};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
