//! run subcommand
//!
//! Builds the run configuration, executes the smoke run and returns the
//! process exit code to the caller.

use anyhow::Result;
use clap::Args;

use crate::config::RunConfig;
use crate::runner::SmokeRunner;

/// Arguments for the run subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Print payload excerpts for passing checks and full details for failures
    #[arg(short, long)]
    pub verbose: bool,

    /// Service base URL (overrides AISMOKE_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Only run checks whose name contains this substring (health always runs)
    #[arg(long)]
    pub only: Option<String>,
}

/// Execute the run command
pub async fn execute(args: &RunArgs) -> Result<i32> {
    let mut config = RunConfig::from_env()?;
    if let Some(base_url) = &args.base_url {
        config = config.with_base_url(base_url)?;
    }
    config.verbose = args.verbose;
    config.only = args.only.clone();

    let runner = SmokeRunner::new(config)?;
    let report = runner.run().await;

    Ok(report.exit_code())
}
