// file: src/commands/mod.rs
// version: 1.0.0
// guid: 0b8e5c71-4a2f-4d93-8e1b-6f3c2a9d7e45

//! Tool sub-commands
//!
//! Invocation builders for the `sui` and `walrus` sub-commands, plus thin
//! wrappers that run them through a borrowed [`CommandRunner`](crate::executor::CommandRunner).

pub mod sui;
pub mod walrus;

pub use sui::SuiCommands;
pub use walrus::WalrusCommands;
