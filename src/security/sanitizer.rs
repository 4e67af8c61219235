// file: src/security/sanitizer.rs
// version: 1.0.0
// guid: b5bebf02-04cf-4402-b106-ec8ca455550f

//! Output redaction
//!
//! Tool output is shown in terminals, copied to clipboards and pasted into
//! bug reports. Before display, private keys are blanked, full-length
//! addresses are shortened and mnemonic phrases are replaced.

use crate::error::{BridgeError, Result};
use regex::{Captures, Regex};
use tracing::debug;

const PRIVATE_KEY_PATTERN: &str = r"suiprivkey[a-zA-Z0-9]+";
const ADDRESS_PATTERN: &str = r"0x[a-fA-F0-9]{64}";
const MNEMONIC_PATTERN: &str = r"\b(?:[a-z]+[ \t]+){11,23}[a-z]+\b";

/// Compiled redaction rules
#[derive(Debug, Clone)]
pub struct Sanitizer {
    private_key: Regex,
    address: Regex,
    mnemonic: Regex,
}

impl Sanitizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            private_key: compile(PRIVATE_KEY_PATTERN)?,
            address: compile(ADDRESS_PATTERN)?,
            mnemonic: compile(MNEMONIC_PATTERN)?,
        })
    }

    /// Redact secrets from tool output
    pub fn sanitize(&self, text: &str) -> String {
        let result = self.private_key.replace_all(text, "****");
        let result = self
            .address
            .replace_all(&result, |caps: &Captures| mask_address(&caps[0]));
        let result = self.mnemonic.replace_all(&result, "[MNEMONIC]").into_owned();

        if result != text {
            debug!("Redacted sensitive values from command output");
        }
        result
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| BridgeError::parse(format!("Regex error: {}", e)))
}

/// Redact secrets from tool output using a freshly compiled [`Sanitizer`]
pub fn sanitize_output(text: &str) -> Result<String> {
    Ok(Sanitizer::new()?.sanitize(text))
}

/// Shorten an address to its first and last four hex digits
pub fn mask_address(addr: &str) -> String {
    if addr.len() < 10 || !addr.is_ascii() {
        return addr.to_string();
    }
    let body = addr.strip_prefix("0x").unwrap_or(addr);
    format!("0x{}...{}", &body[..4], &addr[addr.len() - 4..])
}
