// file: src/executor/testing.rs
// version: 1.0.0
// guid: 65a90b8c-456b-4fb2-afa6-aa2b56b2db79

//! Recording stub spawner for unit tests

use super::process::{ProcessSpawner, RawOutput, SpawnRequest};
use async_trait::async_trait;
use std::io;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
enum StubResponse {
    Exit(RawOutput),
    SpawnError(String),
}

/// Returns the same canned response for every spawn and records each request
#[derive(Debug)]
pub struct StubSpawner {
    response: StubResponse,
    delay: Option<Duration>,
    calls: Mutex<Vec<SpawnRequest>>,
}

impl StubSpawner {
    fn with_response(response: StubResponse) -> Self {
        Self {
            response,
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Exit 0 with the given streams
    pub fn succeeding(stdout: &str, stderr: &str) -> Self {
        Self::with_response(StubResponse::Exit(RawOutput {
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
            exit_code: Some(0),
            success: true,
        }))
    }

    /// Exit with a non-zero `code` and the given streams
    pub fn failing(code: i32, stdout: &str, stderr: &str) -> Self {
        Self::with_response(StubResponse::Exit(RawOutput {
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
            exit_code: Some(code),
            success: false,
        }))
    }

    /// Fail to start, as when the binary is missing
    pub fn spawn_error(reason: &str) -> Self {
        Self::with_response(StubResponse::SpawnError(reason.to_string()))
    }

    /// Sleep before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<SpawnRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Option<SpawnRequest> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ProcessSpawner for StubSpawner {
    async fn spawn(&self, request: &SpawnRequest) -> io::Result<RawOutput> {
        self.calls.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.response {
            StubResponse::Exit(output) => Ok(output.clone()),
            StubResponse::SpawnError(reason) => {
                Err(io::Error::new(io::ErrorKind::NotFound, reason.clone()))
            }
        }
    }
}
