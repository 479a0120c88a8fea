//! CLI module for aismoke
//!
//! Provides the command-line interface for the smoke-test runner.

pub mod list;
pub mod run;

use clap::{Parser, Subcommand};

/// AI service smoke tester - Sequentially exercises every capability endpoint
#[derive(Parser, Debug)]
#[command(name = "aismoke")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    AISMOKE_BASE_URL        Service base URL (default: http://localhost:8000)
    AISMOKE_TIMEOUT_SECS    HTTP client timeout in seconds (default: 120)
    AISMOKE_LOG             Log filter for diagnostics (default: warn)
    WEB_SEARCH_ENABLED      "true" enables the web-search backed checks
    WEB_SEARCH_API_KEY      Required (non-empty) for the same checks
"#)]
pub struct Cli {
    /// Subcommand to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments for the default `run` subcommand
    #[command(flatten)]
    pub run: run::RunArgs,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the smoke checks (default)
    Run(run::RunArgs),
    /// List the registered checks in execution order
    List,
}
