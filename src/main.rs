// file: src/main.rs
// version: 1.0.0
// guid: a6c40e2b-95d7-4f13-8b6e-d2f1c7a3e509

//! sui-cli-bridge - main entry point

use clap::Parser;
use sui_cli_bridge::{
    cli::{dispatch, Cli, LogFormat},
    config::ConfigLoader,
    executor::CommandRunner,
    logging::logger,
    security::Sanitizer,
    Result,
};
use tokio::signal;
use tracing::{debug, warn};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    match cli.log_format {
        LogFormat::Text => logger::init_logger(cli.verbose, cli.quiet)?,
        LogFormat::Json => logger::init_json_logger(cli.verbose, cli.quiet)?,
    }

    let config = ConfigLoader::new().load(cli.config.as_deref())?;
    debug!("Using configuration: {:?}", config);

    // One runner for the whole process, passed down explicitly
    let runner = CommandRunner::from_config(&config);
    let sanitizer = if config.redact_output && !cli.no_redact {
        Some(Sanitizer::new()?)
    } else {
        None
    };

    let shutdown_signal = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let outcome = tokio::select! {
        result = dispatch(cli.command, &runner, &config) => Some(result),
        _ = shutdown_signal => None,
    };
    // The command future (and any kill-on-drop child) is gone by now
    let Some(result) = outcome else {
        warn!("Interrupted by user");
        std::process::exit(130);
    };

    let render = |text: &str| match &sanitizer {
        Some(s) => s.sanitize(text),
        None => text.to_string(),
    };

    // Failures carry the tool's diagnostics, which get the same redaction
    let report = match result {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", render(&e.to_string()));
            std::process::exit(1);
        }
    };

    if let Some(stderr) = &report.stderr {
        eprintln!("{}", render(stderr));
    }
    if !report.stdout.is_empty() {
        println!("{}", render(&report.stdout));
    }

    if !report.ok {
        std::process::exit(1);
    }
    Ok(())
}
