// file: src/commands/sui.rs
// version: 1.0.0
// guid: c83fa8bf-c532-4c1a-a12a-2506ab0e8a6a

//! `sui` client sub-commands

use crate::executor::{CommandRunner, ExecutionResult, Invocation, ProcessSpawner};
use crate::parser::{self, Capability};
use crate::security::ValidationUtils;
use crate::Result;
use serde_json::{json, Value};
use tracing::info;

/// Invocation of `sui keytool list`
pub fn keytool_list(program: &str) -> Invocation {
    Invocation::new(program).args(["keytool", "list"]).structured()
}

/// Invocation of `sui keytool generate <scheme> [--word-length N]`
pub fn keytool_generate(program: &str, scheme: &str, word_length: Option<u32>) -> Result<Invocation> {
    ValidationUtils::validate_key_scheme(scheme)?;
    let mut inv = Invocation::new(program).args(["keytool", "generate", scheme]);
    if let Some(length) = word_length {
        ValidationUtils::validate_word_length(length)?;
        inv = inv.arg("--word-length").arg(length.to_string());
    }
    Ok(inv)
}

/// Invocation of `sui client switch --address <address>`
pub fn client_switch(program: &str, address: &str) -> Result<Invocation> {
    ValidationUtils::validate_address(address)?;
    Ok(Invocation::new(program).args(["client", "switch", "--address", address]))
}

/// Invocation of `sui client active-address`
pub fn client_active_address(program: &str) -> Invocation {
    Invocation::new(program).args(["client", "active-address"])
}

/// Invocation of `sui client envs`
pub fn client_envs(program: &str) -> Invocation {
    Invocation::new(program).args(["client", "envs"]).structured()
}

/// The `sui` sub-commands, run through a shared runner
pub struct SuiCommands<'a, S: ProcessSpawner> {
    runner: &'a CommandRunner<S>,
    program: String,
}

impl<'a, S: ProcessSpawner> SuiCommands<'a, S> {
    pub fn new(runner: &'a CommandRunner<S>, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Keys known to the local keystore, one JSON value per key
    pub async fn list_keys(&self) -> Result<Vec<Value>> {
        let output = self.runner.execute(&keytool_list(&self.program)).await?;
        let keys = parser::parse_keys(&output)?;
        info!("Found {} keys", keys.len());
        Ok(keys)
    }

    /// Generate a new key. Returns the tool's report (address, phrase...).
    pub async fn generate_key(&self, scheme: &str, word_length: Option<u32>) -> Result<String> {
        let inv = keytool_generate(&self.program, scheme, word_length)?;
        self.runner.execute(&inv).await
    }

    pub async fn switch_address(&self, address: &str) -> Result<String> {
        let inv = client_switch(&self.program, address)?;
        let output = self.runner.execute(&inv).await?;
        info!("Switched active address");
        Ok(output)
    }

    pub async fn active_address(&self) -> Result<String> {
        self.runner.execute(&client_active_address(&self.program)).await
    }

    /// Configured environments. Text output is wrapped as `{"envs": "<text>"}`.
    pub async fn environments(&self) -> Result<Value> {
        let output = self.runner.execute(&client_envs(&self.program)).await?;
        match Capability::probe(&output) {
            Capability::Structured => Ok(serde_json::from_str(&output)?),
            Capability::Text => Ok(json!({ "envs": output })),
        }
    }

    /// Run any `sui` sub-command with the given tokens
    pub async fn passthrough(&self, args: &[String], structured: bool) -> Result<ExecutionResult> {
        let mut inv = Invocation::new(self.program.as_str()).args(args.iter().cloned());
        if structured {
            inv = inv.structured();
        }
        self.runner.run(&inv).await
    }
}
