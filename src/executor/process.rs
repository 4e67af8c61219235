// file: src/executor/process.rs
// version: 1.0.0
// guid: e8c4c7ef-2dba-4d6b-9e55-bae1f04ff330

//! Process-spawning primitive
//!
//! The runner never builds a shell command line. It hands a [`SpawnRequest`]
//! (program name plus argument array) to a [`ProcessSpawner`], which starts
//! the program directly.

use super::environment::SearchPath;
use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::debug;

/// Default cap for each captured stream (10 MiB)
pub const DEFAULT_MAX_BUFFER_BYTES: usize = 10 * 1024 * 1024;

/// Everything needed to start one child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnRequest {
    pub program: String,
    pub args: Vec<String>,
    pub working_directory: Option<PathBuf>,
    pub search_path: SearchPath,
}

/// Raw, untrimmed output of a finished child
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub exit_code: Option<i32>,
    pub success: bool,
}

/// Trait for starting an external program and collecting its output
#[async_trait]
pub trait ProcessSpawner: Send + Sync {
    /// Run the program to completion. An `Err` means the process could not be
    /// started or its output could not be collected.
    async fn spawn(&self, request: &SpawnRequest) -> io::Result<RawOutput>;
}

/// Spawner backed by `tokio::process`
#[derive(Debug, Clone)]
pub struct TokioSpawner {
    max_buffer_bytes: usize,
}

impl TokioSpawner {
    pub fn new() -> Self {
        Self::with_max_buffer(DEFAULT_MAX_BUFFER_BYTES)
    }

    /// Cap each captured stream at `max_buffer_bytes`
    pub fn with_max_buffer(max_buffer_bytes: usize) -> Self {
        Self { max_buffer_bytes }
    }

    pub fn max_buffer_bytes(&self) -> usize {
        self.max_buffer_bytes
    }
}

impl Default for TokioSpawner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcessSpawner for TokioSpawner {
    async fn spawn(&self, request: &SpawnRequest) -> io::Result<RawOutput> {
        let path = request.search_path.joined()?;
        let cwd = match &request.working_directory {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let resolved = which::which_in(&request.program, Some(&path), &cwd).map_err(|e| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: command not found ({})", request.program, e),
            )
        })?;
        debug!("Resolved {} to {}", request.program, resolved.display());

        let mut cmd = Command::new(&resolved);
        cmd.args(&request.args)
            .env("PATH", &path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = &request.working_directory {
            cmd.current_dir(dir);
        }

        let mut child = cmd.spawn()?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("stdout was not captured"))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| io::Error::other("stderr was not captured"))?;

        let limit = self.max_buffer_bytes;
        let captured = tokio::try_join!(
            read_capped(stdout, limit, "stdout"),
            read_capped(stderr, limit, "stderr")
        );
        let (stdout, stderr) = match captured {
            Ok(streams) => streams,
            Err(e) => {
                let _ = child.start_kill();
                let _ = child.wait().await;
                return Err(e);
            }
        };

        let status = child.wait().await?;
        Ok(RawOutput {
            stdout,
            stderr,
            exit_code: status.code(),
            success: status.success(),
        })
    }
}

/// Read a stream to the end, failing once more than `limit` bytes arrive
async fn read_capped<R>(reader: R, limit: usize, stream: &'static str) -> io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    let mut limited = reader.take(limit as u64 + 1);
    limited.read_to_end(&mut buf).await?;
    if buf.len() > limit {
        return Err(io::Error::other(format!(
            "{} exceeded maximum buffer size of {} bytes",
            stream, limit
        )));
    }
    Ok(buf)
}
