// file: src/config/loader.rs
// version: 1.0.0
// guid: 6729af41-02e0-4c1d-af33-9bd606872a8b

//! Configuration file loading and environment variable substitution

use super::RunnerConfig;
use crate::error::BridgeError;
use crate::Result;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory under the platform config dir holding `config.yaml`
const APP_DIR: &str = "sui-cli-bridge";
const CONFIG_FILE: &str = "config.yaml";

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Default config location, e.g. `~/.config/sui-cli-bridge/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from `explicit` if given, else from the default location if it
    /// exists, else fall back to built-in defaults.
    pub fn load(&self, explicit: Option<&Path>) -> Result<RunnerConfig> {
        if let Some(path) = explicit {
            return self.load_runner_config(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => self.load_runner_config(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(RunnerConfig::default())
            }
        }
    }

    /// Load runner configuration from YAML file
    pub fn load_runner_config<P: AsRef<Path>>(&self, path: P) -> Result<RunnerConfig> {
        let content = fs::read_to_string(&path).map_err(|e| {
            BridgeError::config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config = self.parse_runner_config(&content)?;
        info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse runner configuration from YAML text
    pub fn parse_runner_config(&self, content: &str) -> Result<RunnerConfig> {
        let expanded = self.expand_env_vars(content)?;
        let mut config: RunnerConfig = if expanded.trim().is_empty() {
            RunnerConfig::default()
        } else {
            serde_yaml::from_str(&expanded)?
        };

        config.extra_search_dirs = self.expand_dirs(&config.extra_search_dirs)?;
        config.validate()?;

        Ok(config)
    }

    /// Expand environment variables in configuration content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| BridgeError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut result = content.to_string();
        let mut missing_vars = Vec::new();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];

            if let Some(value) = self.env_vars.get(var_name) {
                result = result.replace(placeholder, value);
            } else if !missing_vars.iter().any(|v| v == var_name) {
                missing_vars.push(var_name.to_string());
            }
        }

        if !missing_vars.is_empty() {
            return Err(BridgeError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result)
    }

    /// Expand a leading `~` in configured search directories
    fn expand_dirs(&self, dirs: &[PathBuf]) -> Result<Vec<PathBuf>> {
        dirs.iter()
            .map(|dir| {
                let raw = dir.to_str().ok_or_else(|| {
                    BridgeError::config(format!("Search directory is not valid UTF-8: {}", dir.display()))
                })?;
                Ok(PathBuf::from(shellexpand::tilde(raw).into_owned()))
            })
            .collect()
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_env_var_expansion() {
        let mut loader = ConfigLoader::new();
        loader.set_env_var("TEST_VAR".to_string(), "test_value".to_string());

        let content = "key: ${TEST_VAR}";
        let result = loader.expand_env_vars(content).unwrap();
        assert_eq!(result, "key: test_value");
    }

    #[test]
    fn test_missing_env_var() {
        let loader = ConfigLoader::new();
        let content = "key: ${SUI_BRIDGE_SURELY_MISSING_VAR}";

        let result = loader.expand_env_vars(content);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Missing environment variables"));
    }

    #[test]
    fn test_empty_content_gives_defaults() {
        let loader = ConfigLoader::new();
        let config = loader.parse_runner_config("   \n").unwrap();
        assert_eq!(config, RunnerConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let loader = ConfigLoader::new();
        let config = loader.parse_runner_config("timeout_seconds: 120\n").unwrap();
        assert_eq!(config.timeout_seconds, Some(120));
        assert_eq!(config.structured_output_flag, "--json");
        assert_eq!(config.sui_program, "sui");
    }

    #[test]
    fn test_tilde_expansion_in_search_dirs() {
        let loader = ConfigLoader::new();
        let config = loader
            .parse_runner_config("extra_search_dirs:\n  - ~/sui/bin\n  - /opt/walrus\n")
            .unwrap();

        assert!(!config.extra_search_dirs[0].starts_with("~"));
        assert!(config.extra_search_dirs[0].ends_with("sui/bin"));
        assert_eq!(config.extra_search_dirs[1], PathBuf::from("/opt/walrus"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let loader = ConfigLoader::new();
        assert!(loader.parse_runner_config("max_buffer_bytes: 0\n").is_err());
        assert!(loader.parse_runner_config("structured_output_flag: json\n").is_err());
    }

    #[test]
    fn test_load_runner_config() -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
structured_output_flag: --json
max_buffer_bytes: 1048576
timeout_seconds: 300
redact_output: false
sui_program: ${{SUI_BRIDGE_TEST_BIN}}
walrus_program: walrus
"#
        )
        .unwrap();

        let mut loader = ConfigLoader::new();
        loader.set_env_var("SUI_BRIDGE_TEST_BIN".to_string(), "/opt/sui/bin/sui".to_string());
        let config = loader.load_runner_config(file.path())?;

        assert_eq!(config.max_buffer_bytes, 1_048_576);
        assert_eq!(config.timeout_seconds, Some(300));
        assert!(!config.redact_output);
        assert_eq!(config.sui_program, "/opt/sui/bin/sui");

        Ok(())
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let loader = ConfigLoader::new();
        let err = loader
            .load(Some(Path::new("/nonexistent/sui-cli-bridge.yaml")))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
