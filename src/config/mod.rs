// file: src/config/mod.rs
// version: 1.0.0
// guid: 2c87a3d3-b226-485d-bf00-2fa65bf6077d

//! Configuration module for the sui/walrus command bridge
//!
//! Handles loading and validation of the runner configuration.

pub mod loader;

pub use loader::ConfigLoader;

use crate::error::{BridgeError, Result};
use crate::executor::process::DEFAULT_MAX_BUFFER_BYTES;
use crate::executor::runner::DEFAULT_STRUCTURED_FLAG;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runner and front-end settings, read from YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Appended to invocations that want machine-readable output
    pub structured_output_flag: String,
    /// Cap for each captured output stream
    pub max_buffer_bytes: usize,
    /// Kill children that run longer than this. Unset means no limit.
    pub timeout_seconds: Option<u64>,
    /// Searched before the well-known installation directories
    pub extra_search_dirs: Vec<PathBuf>,
    /// Mask private keys, addresses and mnemonics before printing
    pub redact_output: bool,
    pub sui_program: String,
    pub walrus_program: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            structured_output_flag: DEFAULT_STRUCTURED_FLAG.to_string(),
            max_buffer_bytes: DEFAULT_MAX_BUFFER_BYTES,
            timeout_seconds: None,
            extra_search_dirs: Vec::new(),
            redact_output: true,
            sui_program: "sui".to_string(),
            walrus_program: "walrus".to_string(),
        }
    }
}

impl RunnerConfig {
    /// Check the configuration for values the runner cannot work with
    pub fn validate(&self) -> Result<()> {
        let flag = self.structured_output_flag.trim();
        if flag.is_empty() || !flag.starts_with('-') || flag.contains(char::is_whitespace) {
            return Err(BridgeError::config(format!(
                "structured_output_flag must be a single flag such as --json, got {:?}",
                self.structured_output_flag
            )));
        }

        if self.max_buffer_bytes == 0 {
            return Err(BridgeError::config("max_buffer_bytes must be greater than zero"));
        }

        if self.timeout_seconds == Some(0) {
            return Err(BridgeError::config(
                "timeout_seconds must be greater than zero (omit it to disable the timeout)",
            ));
        }

        for (field, program) in [("sui_program", &self.sui_program), ("walrus_program", &self.walrus_program)] {
            if program.trim().is_empty() {
                return Err(BridgeError::config(format!("{} must not be empty", field)));
            }
        }

        Ok(())
    }
}
