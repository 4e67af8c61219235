// file: src/security/validation.rs
// version: 1.0.0
// guid: 2182b3b1-cfa1-4487-8122-badb5ae7fda1

//! Input validation for tool arguments

use crate::error::BridgeError;
use crate::Result;

/// Key schemes accepted by `sui keytool generate`
pub const KEY_SCHEMES: [&str; 3] = ["ed25519", "secp256k1", "secp256r1"];

/// Mnemonic lengths accepted by `sui keytool generate --word-length`
pub const WORD_LENGTHS: [u32; 5] = [12, 15, 18, 21, 24];

/// Utility functions for input validation
pub struct ValidationUtils;

impl ValidationUtils {
    /// Validate a key scheme name
    pub fn validate_key_scheme(scheme: &str) -> Result<()> {
        if KEY_SCHEMES.contains(&scheme) {
            Ok(())
        } else {
            Err(BridgeError::invalid_argument(format!(
                "Unknown key scheme '{}', expected one of: {}",
                scheme,
                KEY_SCHEMES.join(", ")
            )))
        }
    }

    /// Validate a mnemonic word count
    pub fn validate_word_length(length: u32) -> Result<()> {
        if WORD_LENGTHS.contains(&length) {
            Ok(())
        } else {
            Err(BridgeError::invalid_argument(format!(
                "Unsupported word length {}, expected one of 12, 15, 18, 21, 24",
                length
            )))
        }
    }

    /// Validate an account or object address: `0x` followed by 1-64 hex digits
    pub fn validate_address(address: &str) -> Result<()> {
        let hex = address.strip_prefix("0x").ok_or_else(|| {
            BridgeError::invalid_argument(format!("Address must start with 0x: {}", address))
        })?;

        if hex.is_empty() || hex.len() > 64 {
            return Err(BridgeError::invalid_argument(format!(
                "Address must have 1 to 64 hex digits: {}",
                address
            )));
        }

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(BridgeError::invalid_argument(format!(
                "Address contains non-hex characters: {}",
                address
            )));
        }

        Ok(())
    }

    /// Validate a storage blob identifier
    pub fn validate_blob_id(blob_id: &str) -> Result<()> {
        if blob_id.trim().is_empty() {
            return Err(BridgeError::invalid_argument("Blob ID cannot be empty"));
        }
        if blob_id.contains(char::is_whitespace) {
            return Err(BridgeError::invalid_argument(format!(
                "Blob ID cannot contain whitespace: {:?}",
                blob_id
            )));
        }
        Ok(())
    }

    /// Validate a storage duration in epochs
    pub fn validate_epochs(epochs: u32) -> Result<()> {
        if epochs == 0 {
            return Err(BridgeError::invalid_argument("Epochs must be at least 1"));
        }
        Ok(())
    }
}
