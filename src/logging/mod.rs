// file: src/logging/mod.rs
// version: 1.0.0
// guid: 4e2d9a10-7c3b-4f85-a6d2-91b0e3c5f728

//! Logging setup

pub mod logger;

pub use logger::{init_json_logger, init_logger};
