// file: src/commands/walrus.rs
// version: 1.0.0
// guid: c2ff5297-448c-414f-a15c-fbc75db080fc

//! `walrus` storage sub-commands

use crate::executor::{CommandRunner, Invocation, ProcessSpawner};
use crate::parser;
use crate::security::ValidationUtils;
use crate::Result;
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Invocation of `walrus store <path> [--epochs N]`
pub fn store(program: &str, path: &Path, epochs: Option<u32>) -> Result<Invocation> {
    let mut inv = Invocation::new(program).arg("store").arg(path.to_string_lossy());
    if let Some(epochs) = epochs {
        ValidationUtils::validate_epochs(epochs)?;
        inv = inv.arg("--epochs").arg(epochs.to_string());
    }
    Ok(inv)
}

/// Invocation of `walrus read <blob-id> [--out <path>]`
pub fn read(program: &str, blob_id: &str, out: Option<&Path>) -> Result<Invocation> {
    ValidationUtils::validate_blob_id(blob_id)?;
    let mut inv = Invocation::new(program).args(["read", blob_id]);
    if let Some(out) = out {
        inv = inv.arg("--out").arg(out.to_string_lossy());
    }
    Ok(inv)
}

/// Invocation of `walrus list-blobs`
pub fn list_blobs(program: &str) -> Invocation {
    Invocation::new(program).arg("list-blobs").structured()
}

/// The `walrus` sub-commands, run through a shared runner
pub struct WalrusCommands<'a, S: ProcessSpawner> {
    runner: &'a CommandRunner<S>,
    program: String,
}

impl<'a, S: ProcessSpawner> WalrusCommands<'a, S> {
    pub fn new(runner: &'a CommandRunner<S>, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    /// Upload a file. Walrus reports progress on stderr, which is what comes
    /// back when stdout is empty.
    pub async fn store(&self, path: &Path, epochs: Option<u32>) -> Result<String> {
        let inv = store(&self.program, path, epochs)?;
        let output = self.runner.execute(&inv).await?;
        info!("Stored {}", path.display());
        Ok(output)
    }

    pub async fn read(&self, blob_id: &str, out: Option<&Path>) -> Result<String> {
        let inv = read(&self.program, blob_id, out)?;
        self.runner.execute(&inv).await
    }

    /// Blobs owned by the active wallet, one JSON value per blob
    pub async fn list_blobs(&self) -> Result<Vec<Value>> {
        let output = self.runner.execute(&list_blobs(&self.program)).await?;
        parser::parser_for(&output)?.records(&output)
    }
}
