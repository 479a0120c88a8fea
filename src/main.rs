//! AI service smoke tester Entry Point

use aismoke::cli::{Cli, Commands};
use aismoke::{cli, logging};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init().expect("failed to initialize logging");

    let exit_code = match cli.command {
        Some(Commands::List) => {
            cli::list::execute();
            0
        }
        Some(Commands::Run(args)) => run_or_report(&args).await,
        None => run_or_report(&cli.run).await,
    };

    std::process::exit(exit_code);
}

async fn run_or_report(args: &cli::run::RunArgs) -> i32 {
    match cli::run::execute(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
