// file: src/cli/args.rs
// version: 1.0.0
// guid: 5c1e8f47-2b9d-4a36-9f70-d84a1b2e6c93

//! Command line argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sui-cli-bridge")]
#[command(about = "Run the sui and walrus command-line tools with normalized output")]
#[command(version = crate::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(short, long, global = true, env = "SUI_CLI_BRIDGE_CONFIG", help = "Path to config.yaml")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Print keys, addresses and phrases unmasked")]
    pub no_redact: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Log line format on stderr
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run any program through the runner
    Run {
        #[arg(help = "Program to run, e.g. sui or walrus")]
        program: String,

        #[arg(long, help = "Append the structured output flag")]
        json: bool,

        #[arg(short = 'C', long, help = "Working directory for the program")]
        cwd: Option<PathBuf>,

        #[arg(long, help = "Print stdout and stderr separately")]
        raw: bool,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Check whether the tools are installed
    Check {
        #[arg(help = "Programs to probe (defaults to the configured sui and walrus)")]
        programs: Vec<String>,
    },

    /// List keys in the local keystore
    Keys {
        #[arg(long, help = "Print the keys as JSON")]
        json: bool,
    },

    /// Generate a new key
    GenerateKey {
        #[arg(default_value = "ed25519", help = "ed25519, secp256k1 or secp256r1")]
        scheme: String,

        #[arg(long, help = "Mnemonic length: 12, 15, 18, 21 or 24")]
        word_length: Option<u32>,
    },

    /// Switch the active address
    Switch {
        #[arg(short, long)]
        address: String,
    },

    /// Show the active address
    ActiveAddress,

    /// List configured environments
    Envs,

    /// Upload a file to walrus
    Store {
        path: PathBuf,

        #[arg(long, help = "Number of epochs to store the blob for")]
        epochs: Option<u32>,
    },

    /// Download a blob from walrus
    Read {
        blob_id: String,

        #[arg(short, long, help = "Write the blob to this file")]
        out: Option<PathBuf>,
    },

    /// List blobs owned by the active wallet
    Blobs,
}
