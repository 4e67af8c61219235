// file: src/executor/invocation.rs
// version: 1.0.0
// guid: 8ddf57fa-2a9a-4a73-b7c9-26c8728a7d03

//! Invocation and execution result types

use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// One request to run an external program.
///
/// Arguments are kept as discrete tokens and reach the child process as
/// separate argv entries. Nothing here is ever joined into a shell string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    arguments: Vec<String>,
    working_directory: Option<PathBuf>,
    wants_structured_output: bool,
}

impl Invocation {
    /// Create an invocation of `program` with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            arguments: Vec::new(),
            working_directory: None,
            wants_structured_output: false,
        }
    }

    /// Append a single argument token
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        let arg = arg.into();
        if looks_shell_joined(&arg) {
            warn!(
                "Argument {} for {} looks like several tokens joined together",
                self.arguments.len() + 1,
                self.program
            );
        }
        self.arguments.push(arg);
        self
    }

    /// Append several argument tokens, in order
    pub fn args<I, T>(self, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        args.into_iter().fold(self, |inv, arg| inv.arg(arg))
    }

    /// Run the child in `dir`
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    /// Ask the tool for machine-readable output
    pub fn structured(mut self) -> Self {
        self.wants_structured_output = true;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub fn working_directory(&self) -> Option<&Path> {
        self.working_directory.as_deref()
    }

    pub fn wants_structured_output(&self) -> bool {
        self.wants_structured_output
    }

    /// The argument vector actually handed to the child: the caller's tokens,
    /// followed by `structured_flag` when structured output was requested.
    pub fn effective_arguments(&self, structured_flag: &str) -> Vec<String> {
        let mut args = self.arguments.clone();
        if self.wants_structured_output {
            args.push(structured_flag.to_string());
        }
        args
    }
}

/// Heuristic for arguments that were probably built by string concatenation,
/// e.g. `"--epochs 5"` or `"build && publish"`. Paths with spaces are fine.
fn looks_shell_joined(arg: &str) -> bool {
    if !arg.contains(char::is_whitespace) {
        return false;
    }
    if arg.starts_with('-') {
        return true;
    }
    ["&&", "||", ";", "|"]
        .iter()
        .any(|op| arg.split_whitespace().any(|part| part == *op))
}

/// Captured outcome of one completed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Success-stream text, trimmed
    pub stdout: String,
    /// Diagnostic-stream text, trimmed
    pub stderr: String,
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub success: bool,
    pub duration: Duration,
}

impl ExecutionResult {
    /// The text a caller should see on success: stdout, or stderr when the
    /// tool printed nothing on stdout.
    pub fn output(&self) -> &str {
        if self.stdout.is_empty() {
            &self.stderr
        } else {
            &self.stdout
        }
    }

    /// The most informative text describing a failure, or `None` when the
    /// process printed nothing at all.
    pub fn failure_text(&self) -> Option<&str> {
        if !self.stderr.is_empty() {
            Some(&self.stderr)
        } else if !self.stdout.is_empty() {
            Some(&self.stdout)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(stdout: &str, stderr: &str) -> ExecutionResult {
        ExecutionResult {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            exit_code: Some(0),
            success: true,
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn test_builder_keeps_token_order() {
        let inv = Invocation::new("sui")
            .arg("client")
            .args(["switch", "--address", "0x1"])
            .current_dir("/tmp/pkg");

        assert_eq!(inv.program(), "sui");
        assert_eq!(inv.arguments(), &["client", "switch", "--address", "0x1"]);
        assert_eq!(inv.working_directory(), Some(Path::new("/tmp/pkg")));
        assert!(!inv.wants_structured_output());
    }

    #[test]
    fn test_structured_flag_is_last() {
        let inv = Invocation::new("sui").args(["foo", "bar"]).structured();
        assert_eq!(inv.effective_arguments("--json"), vec!["foo", "bar", "--json"]);
        // the stored arguments are untouched
        assert_eq!(inv.arguments(), &["foo", "bar"]);
    }

    #[test]
    fn test_no_flag_without_request() {
        let inv = Invocation::new("walrus").arg("list-blobs");
        assert_eq!(inv.effective_arguments("--json"), vec!["list-blobs"]);
    }

    #[test]
    fn test_shell_joined_heuristic() {
        assert!(looks_shell_joined("--epochs 5"));
        assert!(looks_shell_joined("build && publish"));
        assert!(looks_shell_joined("a ; b"));
        assert!(!looks_shell_joined("/home/me/My Package"));
        assert!(!looks_shell_joined("a;b"));
        assert!(!looks_shell_joined("$HOME"));
    }

    #[test]
    fn test_output_prefers_stdout() {
        assert_eq!(result("out", "err").output(), "out");
        assert_eq!(result("", "err").output(), "err");
    }

    #[test]
    fn test_failure_text_order() {
        assert_eq!(result("out", "err").failure_text(), Some("err"));
        assert_eq!(result("out", "").failure_text(), Some("out"));
        assert_eq!(result("", "").failure_text(), None);
    }
}
