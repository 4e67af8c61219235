// file: src/security/mod.rs
// version: 1.0.0
// guid: fb1d6a7f-bada-468a-b6c2-ea04a85a0463

//! Input validation and output redaction

pub mod sanitizer;
pub mod validation;

pub use sanitizer::{mask_address, sanitize_output, Sanitizer};
pub use validation::ValidationUtils;
