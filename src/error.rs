// file: src/error.rs
// version: 1.0.0
// guid: 3f6a1c2e-8b4d-4e7a-9c15-2d7e0b9a4f61

use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Error types for the sui/walrus command bridge
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The only failure kind produced by the command runner. `message` carries
    /// the child's diagnostic text unmodified (or the spawn failure reason).
    #[error("External command `{program}` failed: {message}")]
    ExternalCommand { program: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl BridgeError {
    /// Create a new external command failure
    pub fn external_command(program: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalCommand {
            program: program.into(),
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a new parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Whether this error came from a failed external process
    pub fn is_external_command(&self) -> bool {
        matches!(self, Self::ExternalCommand { .. })
    }
}
