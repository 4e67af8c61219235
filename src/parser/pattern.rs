// file: src/parser/pattern.rs
// version: 1.0.0
// guid: 79783da1-41d6-4745-a307-870cc1f2d137

//! Regex scanning of human-formatted output

use super::{push_unique, OutputParser};
use crate::error::BridgeError;
use crate::Result;
use regex::Regex;
use serde_json::{json, Value};

/// Parser for tables and prose printed without the structured-output flag
#[derive(Debug, Clone)]
pub struct PatternParser {
    hex_token: Regex,
    address: Regex,
    labelled_balance: Regex,
    integer: Regex,
}

impl PatternParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            hex_token: compile(r"\b0x[0-9a-fA-F]+\b")?,
            address: compile(r"\b0x[0-9a-fA-F]{64}\b")?,
            labelled_balance: compile(r"(?i)balance[^0-9\n]*([0-9]+(?:[_,][0-9]+)*)\b")?,
            integer: compile(r"\b[0-9]+(?:[_,][0-9]+)*\b")?,
        })
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| BridgeError::parse(format!("Regex error: {}", e)))
}

fn parse_amount(digits: &str) -> Option<u128> {
    digits.replace(['_', ','], "").parse().ok()
}

impl OutputParser for PatternParser {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn records(&self, output: &str) -> Result<Vec<Value>> {
        let records = output
            .lines()
            .filter(|line| self.hex_token.is_match(line))
            .map(|line| {
                let raw = line.trim();
                match self.address.find(line) {
                    Some(m) => json!({ "raw": raw, "address": m.as_str() }),
                    None => json!({ "raw": raw }),
                }
            })
            .collect();
        Ok(records)
    }

    fn addresses(&self, output: &str) -> Result<Vec<String>> {
        let mut found = Vec::new();
        for m in self.address.find_iter(output) {
            push_unique(&mut found, m.as_str());
        }
        Ok(found)
    }

    fn balance(&self, output: &str) -> Result<Option<u128>> {
        if let Some(caps) = self.labelled_balance.captures(output) {
            if let Some(amount) = parse_amount(&caps[1]) {
                return Ok(Some(amount));
            }
        }
        Ok(self
            .integer
            .find_iter(output)
            .find_map(|m| parse_amount(m.as_str())))
    }
}
