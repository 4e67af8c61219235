// file: src/executor/runner.rs
// version: 1.0.0
// guid: f074bcfe-fdf9-48bc-8f97-2bcfd48c805f

//! Command runner: invocation in, normalized text out

use super::environment::SearchPath;
use super::invocation::{ExecutionResult, Invocation};
use super::process::{ProcessSpawner, SpawnRequest, TokioSpawner};
use crate::config::RunnerConfig;
use crate::error::{BridgeError, Result};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Flag appended when an invocation asks for machine-readable output
pub const DEFAULT_STRUCTURED_FLAG: &str = "--json";

/// Argument used by [`CommandRunner::check_installed`]
const VERSION_FLAG: &str = "--version";

/// Per-runner settings, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerSettings {
    pub structured_output_flag: String,
    /// `None` lets a child run for as long as it likes
    pub timeout: Option<Duration>,
    /// Searched before the well-known installation directories
    pub extra_search_dirs: Vec<PathBuf>,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            structured_output_flag: DEFAULT_STRUCTURED_FLAG.to_string(),
            timeout: None,
            extra_search_dirs: Vec::new(),
        }
    }
}

impl From<&RunnerConfig> for RunnerSettings {
    fn from(config: &RunnerConfig) -> Self {
        Self {
            structured_output_flag: config.structured_output_flag.clone(),
            timeout: config.timeout_seconds.map(Duration::from_secs),
            extra_search_dirs: config.extra_search_dirs.clone(),
        }
    }
}

/// Runs external programs and normalizes what they print.
///
/// Holds no mutable state. Construct one at start-up and pass `&CommandRunner`
/// to whatever needs it; concurrent calls are independent.
#[derive(Debug)]
pub struct CommandRunner<S = TokioSpawner> {
    spawner: S,
    settings: RunnerSettings,
}

impl CommandRunner<TokioSpawner> {
    /// Runner with the tokio spawner and default settings
    pub fn new() -> Self {
        Self::with_spawner(TokioSpawner::new(), RunnerSettings::default())
    }

    /// Runner configured from a loaded [`RunnerConfig`]
    pub fn from_config(config: &RunnerConfig) -> Self {
        Self::with_spawner(
            TokioSpawner::with_max_buffer(config.max_buffer_bytes),
            RunnerSettings::from(config),
        )
    }
}

impl Default for CommandRunner<TokioSpawner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ProcessSpawner> CommandRunner<S> {
    pub fn with_spawner(spawner: S, settings: RunnerSettings) -> Self {
        Self { spawner, settings }
    }

    pub fn settings(&self) -> &RunnerSettings {
        &self.settings
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Run an invocation and return its output text.
    ///
    /// On success this is the trimmed stdout, or the trimmed stderr when
    /// stdout is empty. Any failure is `BridgeError::ExternalCommand`.
    pub async fn execute(&self, invocation: &Invocation) -> Result<String> {
        let result = self.run(invocation).await?;
        Ok(result.output().to_string())
    }

    /// Run an invocation and return both captured streams.
    ///
    /// Fails exactly like [`execute`](Self::execute) when the process does not
    /// exit successfully.
    pub async fn run(&self, invocation: &Invocation) -> Result<ExecutionResult> {
        let program = invocation.program();
        if program.trim().is_empty() {
            return Err(BridgeError::external_command(program, "no program specified"));
        }

        let request = SpawnRequest {
            program: program.to_string(),
            args: invocation.effective_arguments(&self.settings.structured_output_flag),
            working_directory: invocation.working_directory().map(PathBuf::from),
            search_path: SearchPath::from_process_env(&self.settings.extra_search_dirs),
        };

        // Arguments may carry key material, so only their count is logged
        debug!("Executing {} with {} argument(s)", program, request.args.len());
        if let Some(dir) = &request.working_directory {
            debug!("Working directory: {}", dir.display());
        }

        let start = Instant::now();
        let raw = self.spawn_with_timeout(&request).await.map_err(|e| {
            error!("Failed to run {}: {}", program, e);
            BridgeError::external_command(program, e.to_string())
        })?;

        let result = ExecutionResult {
            stdout: String::from_utf8_lossy(&raw.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&raw.stderr).trim().to_string(),
            exit_code: raw.exit_code,
            success: raw.success,
            duration: start.elapsed(),
        };

        if !result.success {
            error!("Command {} failed with exit code {:?}", program, result.exit_code);

            let message = match result.failure_text() {
                Some(text) => text.to_string(),
                None => match result.exit_code {
                    Some(code) => format!("exited with status {}", code),
                    None => "terminated by signal".to_string(),
                },
            };
            return Err(BridgeError::external_command(program, message));
        }

        debug!(
            "Command {} completed in {} ms",
            program,
            result.duration.as_millis()
        );
        Ok(result)
    }

    /// Probe whether `program` can be run at all, by asking for its version.
    pub async fn check_installed(&self, program: &str) -> bool {
        let probe = Invocation::new(program).arg(VERSION_FLAG);
        match self.execute(&probe).await {
            Ok(version) => {
                info!("{} is installed: {}", program, version);
                true
            }
            Err(e) => {
                debug!("{} is not available: {}", program, e);
                false
            }
        }
    }

    async fn spawn_with_timeout(&self, request: &SpawnRequest) -> io::Result<super::RawOutput> {
        match self.settings.timeout {
            Some(limit) => tokio::time::timeout(limit, self.spawner.spawn(request))
                .await
                .unwrap_or_else(|_| {
                    Err(io::Error::new(
                        io::ErrorKind::TimedOut,
                        format!("timed out after {} seconds", limit.as_secs_f64()),
                    ))
                }),
            None => self.spawner.spawn(request).await,
        }
    }
}
