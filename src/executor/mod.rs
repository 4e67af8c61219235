// file: src/executor/mod.rs
// version: 1.0.0
// guid: 6f68b71a-f5f1-4e08-9d05-9c3639d57d04

//! External command execution
//!
//! Every `sui` and `walrus` call goes through [`CommandRunner`]: build an
//! [`Invocation`], run it, get back trimmed text or a single
//! `ExternalCommand` error carrying the tool's own diagnostics.

pub mod environment;
pub mod invocation;
pub mod process;
pub mod runner;

#[cfg(test)]
pub(crate) mod testing;

pub use environment::SearchPath;
pub use invocation::{ExecutionResult, Invocation};
pub use process::{ProcessSpawner, RawOutput, SpawnRequest, TokioSpawner};
pub use runner::{CommandRunner, RunnerSettings};
