// file: src/cli/mod.rs
// version: 1.0.0
// guid: 7d3b2c95-e146-4f0a-8b5e-3a9c6d1f2e07

//! Command line interface

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, LogFormat};
pub use commands::{dispatch, Report};
