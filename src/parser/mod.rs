// file: src/parser/mod.rs
// version: 1.0.0
// guid: c2930025-ffa2-42c3-a6e1-e838b31ac258

//! Recovering structured data from tool output
//!
//! Whether `sui`/`walrus` honor `--json` depends on the sub-command and the
//! tool version. Rather than trying JSON and catching the failure, the output
//! is probed once ([`Capability::probe`]) and the matching [`OutputParser`]
//! is used for every extraction.

pub mod pattern;
pub mod structured;

pub use pattern::PatternParser;
pub use structured::StructuredParser;

use crate::Result;
use serde_json::Value;

/// What a piece of output can be parsed as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The whole output is one JSON document
    Structured,
    /// Human-formatted text
    Text,
}

impl Capability {
    pub fn probe(output: &str) -> Self {
        let trimmed = output.trim();
        let looks_like_json = trimmed.starts_with('{') || trimmed.starts_with('[');
        if looks_like_json && serde_json::from_str::<Value>(trimmed).is_ok() {
            Capability::Structured
        } else {
            Capability::Text
        }
    }
}

/// Extraction of the fields callers care about from one tool output
pub trait OutputParser: Send + Sync {
    fn name(&self) -> &'static str;

    /// One JSON value per listed item (keys, blobs, objects...)
    fn records(&self, output: &str) -> Result<Vec<Value>>;

    /// Full-length addresses and object IDs, first occurrence order, no duplicates
    fn addresses(&self, output: &str) -> Result<Vec<String>>;

    /// A balance amount, when the output carries one
    fn balance(&self, output: &str) -> Result<Option<u128>>;
}

/// Pick the parser for `output` according to [`Capability::probe`]
pub fn parser_for(output: &str) -> Result<Box<dyn OutputParser>> {
    Ok(match Capability::probe(output) {
        Capability::Structured => Box::new(StructuredParser),
        Capability::Text => Box::new(PatternParser::new()?),
    })
}

/// Parse the output of `sui keytool list`
pub fn parse_keys(output: &str) -> Result<Vec<Value>> {
    parser_for(output)?.records(output)
}

/// Push `value` unless already present
pub(crate) fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}
