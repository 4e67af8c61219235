// file: src/parser/structured.rs
// version: 1.0.0
// guid: 56d7da08-a9ee-4557-9f25-a522c5a35453

//! JSON output decoding

use super::{push_unique, OutputParser};
use crate::error::BridgeError;
use crate::Result;
use serde_json::Value;

/// Keys that carry a balance amount, in lookup priority order
const BALANCE_KEYS: [&str; 2] = ["totalBalance", "balance"];

/// Parser for output produced with the structured-output flag
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredParser;

impl StructuredParser {
    fn decode(&self, output: &str) -> Result<Value> {
        serde_json::from_str(output.trim())
            .map_err(|e| BridgeError::parse(format!("Output is not valid JSON: {}", e)))
    }
}

impl OutputParser for StructuredParser {
    fn name(&self) -> &'static str {
        "structured"
    }

    fn records(&self, output: &str) -> Result<Vec<Value>> {
        Ok(match self.decode(output)? {
            Value::Array(items) => items,
            Value::Null => Vec::new(),
            other => vec![other],
        })
    }

    fn addresses(&self, output: &str) -> Result<Vec<String>> {
        let value = self.decode(output)?;
        let mut found = Vec::new();
        collect_addresses(&value, &mut found);
        Ok(found)
    }

    fn balance(&self, output: &str) -> Result<Option<u128>> {
        let value = self.decode(output)?;
        Ok(BALANCE_KEYS.iter().find_map(|key| find_amount(&value, key)))
    }
}

fn is_full_address(s: &str) -> bool {
    s.strip_prefix("0x")
        .map(|hex| hex.len() == 64 && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false)
}

fn collect_addresses(value: &Value, found: &mut Vec<String>) {
    match value {
        Value::String(s) if is_full_address(s) => push_unique(found, s),
        Value::Array(items) => items.iter().for_each(|v| collect_addresses(v, found)),
        Value::Object(map) => map.values().for_each(|v| collect_addresses(v, found)),
        _ => {}
    }
}

/// Depth-first search for `key`, accepting numbers and numeric strings
fn find_amount(value: &Value, key: &str) -> Option<u128> {
    match value {
        Value::Object(map) => {
            if let Some(amount) = map.get(key).and_then(as_amount) {
                return Some(amount);
            }
            map.values().find_map(|v| find_amount(v, key))
        }
        Value::Array(items) => items.iter().find_map(|v| find_amount(v, key)),
        _ => None,
    }
}

fn as_amount(value: &Value) -> Option<u128> {
    match value {
        Value::Number(n) => n.as_u64().map(u128::from),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
