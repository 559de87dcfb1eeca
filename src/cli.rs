use crate::domain::models::ErrorSummary;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::constants::DEFAULT_TIMEOUT_MS;

#[derive(Parser, Debug)]
#[command(name = "zenodo", version, about = "Zenodo deposition client")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Use the production service instead of the sandbox"
    )]
    pub production: bool,
    #[arg(
        long,
        global = true,
        help = "Settings file, a JSON object of strings (default ~/.config/zenodo/settings.json)"
    )]
    pub settings: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = ErrorSummary::Last,
        help = "Which remote error entry becomes the error message"
    )]
    pub error_summary: ErrorSummary,
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_TIMEOUT_MS,
        help = "Request timeout in milliseconds"
    )]
    pub timeout_ms: u64,
    #[arg(long, global = true, help = "Log level (off, error, warn, info, debug, trace)")]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the selected environment and whether a token is configured.
    Status,
    /// Print the deposition endpoint, or the files endpoint of a deposition.
    Url {
        #[arg(long)]
        deposition: Option<u64>,
    },
    /// Create a deposition from a JSON metadata file (`-` reads stdin).
    Create {
        #[arg(long)]
        metadata: PathBuf,
    },
    /// Upload one file to an existing deposition.
    Upload {
        #[arg(long)]
        deposition: u64,
        #[arg(long)]
        file: PathBuf,
    },
}
