// file: tests/integration_test.rs
// version: 1.0.0
// guid: d8f25b13-0a6c-4e97-b4d1-5c3e9a7f2b60

//! Integration tests for sui-cli-bridge, using real child processes

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use sui_cli_bridge::{
    executor::{CommandRunner, Invocation},
    BridgeError, Result,
};
use tempfile::{NamedTempFile, TempDir};

const ADDR: &str = "0x7d20dcdb2bca4f508ea9613994683eb4e76e9c4ed371169677c1be02aaf0b58e";

#[tokio::test]
async fn test_arguments_reach_child_untouched() -> Result<()> {
    let runner = CommandRunner::new();
    let inv = Invocation::new("echo").args(["a;b", "$HOME", "$(id)", "x y"]);

    let out = runner.execute(&inv).await?;

    assert_eq!(out, "a;b $HOME $(id) x y");
    Ok(())
}

#[tokio::test]
async fn test_stderr_returned_when_stdout_empty() -> Result<()> {
    let runner = CommandRunner::new();
    let inv = Invocation::new("sh").args(["-c", "echo 'BUILDING pkg' >&2"]);

    let out = runner.execute(&inv).await?;

    assert_eq!(out, "BUILDING pkg");
    Ok(())
}

#[tokio::test]
async fn test_failure_embeds_stderr() {
    let runner = CommandRunner::new();
    let inv = Invocation::new("sh").args(["-c", "echo partial; echo 'error: X' >&2; exit 4"]);

    let err = runner.execute(&inv).await.unwrap_err();

    match err {
        BridgeError::ExternalCommand { program, message } => {
            assert_eq!(program, "sh");
            assert_eq!(message, "error: X");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_binary() {
    let runner = CommandRunner::new();
    let inv = Invocation::new("sui-cli-bridge-no-such-tool");

    let err = runner.execute(&inv).await.unwrap_err();
    assert!(err.is_external_command());
    assert!(!runner.check_installed("sui-cli-bridge-no-such-tool").await);
}

#[tokio::test]
async fn test_check_installed_with_real_tool() {
    let runner = CommandRunner::new();
    assert!(runner.check_installed(env!("CARGO")).await);
}

#[tokio::test]
async fn test_working_directory() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("Move.toml"), "[package]\nname = \"demo\"\n")?;
    let runner = CommandRunner::new();

    let out = runner
        .execute(&Invocation::new("ls").current_dir(dir.path()))
        .await?;

    assert_eq!(out, "Move.toml");
    Ok(())
}

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

fn bridge(config: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("sui-cli-bridge").unwrap();
    cmd.env("SUI_CLI_BRIDGE_CONFIG", config.path());
    cmd
}

#[test]
fn test_cli_run_prints_output() {
    let config = config_file("redact_output: true\n");

    bridge(&config)
        .args(["run", "echo", "hello", "world"])
        .assert()
        .success()
        .stdout("hello world\n");
}

#[test]
fn test_cli_redacts_addresses() {
    let config = config_file("redact_output: true\n");

    bridge(&config)
        .args(["run", "echo", ADDR])
        .assert()
        .success()
        .stdout(predicate::str::contains("0x7d20...b58e"))
        .stdout(predicate::str::contains(ADDR).not());

    bridge(&config)
        .args(["--no-redact", "run", "echo", ADDR])
        .assert()
        .success()
        .stdout(predicate::str::contains(ADDR));
}

#[test]
fn test_cli_failure_shows_tool_diagnostics() {
    let config = config_file("");

    bridge(&config)
        .args(["run", "sh", "--", "-c", "echo 'Cannot find gas coin' >&2; exit 2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot find gas coin"));
}

#[test]
fn test_cli_redacts_failure_diagnostics() {
    let config = config_file("redact_output: true\n");
    let script = format!("echo 'key suiprivkey1abcXYZ owner {}' >&2; exit 1", ADDR);

    for level in ["--quiet", "--verbose"] {
        bridge(&config)
            .args([level, "run", "sh", "--", "-c", script.as_str()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("owner 0x7d20...b58e"))
            .stderr(predicate::str::contains(ADDR).not())
            .stderr(predicate::str::contains("suiprivkey1abcXYZ").not());
    }
}

#[test]
fn test_cli_verbose_logs_do_not_echo_arguments() {
    let config = config_file("redact_output: true\n");

    bridge(&config)
        .args(["-v", "run", "echo", ADDR])
        .assert()
        .success()
        .stderr(predicate::str::contains("Executing echo with 1 argument(s)"))
        .stderr(predicate::str::contains(ADDR).not());
}

#[test]
fn test_cli_json_log_format() {
    let config = config_file("");

    bridge(&config)
        .env_remove("RUST_LOG")
        .args(["--log-format", "json", "-v", "run", "echo", "hi"])
        .assert()
        .success()
        .stdout("hi\n")
        .stderr(predicate::str::contains(r#""level":"DEBUG""#));
}

#[test]
fn test_cli_check_missing_tool() {
    let config = config_file("");

    bridge(&config)
        .args(["check", "sui-cli-bridge-no-such-tool"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("sui-cli-bridge-no-such-tool (not found)"));
}

#[test]
fn test_cli_rejects_invalid_config() {
    let config = config_file("max_buffer_bytes: 0\n");

    bridge(&config)
        .args(["run", "echo", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_buffer_bytes"));
}
