// file: src/cli/commands.rs
// version: 1.0.0
// guid: 1f6a4d83-9c27-4e5b-b0d8-72e5a3c9f146

//! Command implementations for the CLI
//!
//! Each command returns a [`Report`] instead of printing, so `main` decides
//! on redaction and output streams in one place.

use super::args::Commands;
use crate::commands::{SuiCommands, WalrusCommands};
use crate::config::RunnerConfig;
use crate::executor::{CommandRunner, Invocation, ProcessSpawner};
use crate::logging::logger::with_async_operation_span;
use crate::Result;
use colored::Colorize;
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

/// What a command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Printed on stdout
    pub stdout: String,
    /// Printed on stderr, when a command surfaces both streams
    pub stderr: Option<String>,
    /// Whether the process should exit with status 0
    pub ok: bool,
}

impl Report {
    fn text(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: None,
            ok: true,
        }
    }
}

/// Run one parsed CLI command
pub async fn dispatch<S: ProcessSpawner>(
    command: Commands,
    runner: &CommandRunner<S>,
    config: &RunnerConfig,
) -> Result<Report> {
    let sui = SuiCommands::new(runner, config.sui_program.as_str());
    let walrus = WalrusCommands::new(runner, config.walrus_program.as_str());

    match command {
        Commands::Run {
            program,
            json,
            cwd,
            raw,
            args,
        } => {
            with_async_operation_span("run", || {
                run_command(runner, &program, args, json, cwd, raw)
            })
            .await
        }
        Commands::Check { programs } => {
            let programs = if programs.is_empty() {
                vec![config.sui_program.clone(), config.walrus_program.clone()]
            } else {
                programs
            };
            with_async_operation_span("check", || check_command(runner, programs)).await
        }
        Commands::Keys { json } => {
            let keys = with_async_operation_span("keys", || sui.list_keys()).await?;
            render_records(&keys, json, &["suiAddress", "address", "raw"])
        }
        Commands::GenerateKey {
            scheme,
            word_length,
        } => Ok(Report::text(sui.generate_key(&scheme, word_length).await?)),
        Commands::Switch { address } => Ok(Report::text(sui.switch_address(&address).await?)),
        Commands::ActiveAddress => Ok(Report::text(sui.active_address().await?)),
        Commands::Envs => {
            let envs = sui.environments().await?;
            let text = match envs.get("envs").and_then(Value::as_str) {
                Some(table) => table.to_string(),
                None => serde_json::to_string_pretty(&envs)?,
            };
            Ok(Report::text(text))
        }
        Commands::Store { path, epochs } => {
            with_async_operation_span("store", || walrus.store(&path, epochs))
                .await
                .map(Report::text)
        }
        Commands::Read { blob_id, out } => {
            Ok(Report::text(walrus.read(&blob_id, out.as_deref()).await?))
        }
        Commands::Blobs => {
            let blobs = walrus.list_blobs().await?;
            render_records(&blobs, false, &["blobId", "raw"])
        }
    }
}

async fn run_command<S: ProcessSpawner>(
    runner: &CommandRunner<S>,
    program: &str,
    args: Vec<String>,
    json: bool,
    cwd: Option<PathBuf>,
    raw: bool,
) -> Result<Report> {
    let mut inv = Invocation::new(program).args(args);
    if json {
        inv = inv.structured();
    }
    if let Some(dir) = cwd {
        inv = inv.current_dir(dir);
    }

    if raw {
        let result = runner.run(&inv).await?;
        return Ok(Report {
            stdout: result.stdout,
            stderr: (!result.stderr.is_empty()).then_some(result.stderr),
            ok: true,
        });
    }

    Ok(Report::text(runner.execute(&inv).await?))
}

async fn check_command<S: ProcessSpawner>(
    runner: &CommandRunner<S>,
    programs: Vec<String>,
) -> Result<Report> {
    let mut lines = Vec::with_capacity(programs.len());
    let mut missing = 0;

    for program in &programs {
        if runner.check_installed(program).await {
            lines.push(format!("{} {}", "✓".green(), program));
        } else {
            missing += 1;
            lines.push(format!("{} {} (not found)", "✗".red(), program));
        }
    }

    info!(
        "{} of {} tools available",
        programs.len() - missing,
        programs.len()
    );
    Ok(Report {
        stdout: lines.join("\n"),
        stderr: None,
        ok: missing == 0,
    })
}

/// One line per record using the first present field in `fields`, or JSON
fn render_records(records: &[Value], json: bool, fields: &[&str]) -> Result<Report> {
    if json {
        return Ok(Report::text(serde_json::to_string_pretty(records)?));
    }

    let lines: Vec<String> = records
        .iter()
        .map(|record| {
            fields
                .iter()
                .find_map(|f| record.get(*f).and_then(Value::as_str))
                .map(str::to_string)
                .unwrap_or_else(|| record.to_string())
        })
        .collect();

    Ok(Report::text(lines.join("\n")))
}
