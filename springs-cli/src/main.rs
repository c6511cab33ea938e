//! Springs CLI - count damaged spring arrangements in a puzzle input

mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

use clap::Parser;
use cli::Args;
use config::Config;
use env_logger::Env;
use error::{CliError, ExecutorError};
use executor::Executor;
use log::debug;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;

    // RUST_LOG wins over the verbosity flags
    let _ = env_logger::Builder::from_env(
        Env::default().default_filter_or(config.log_level.as_str().to_ascii_lowercase()),
    )
    .try_init();

    debug!("reading input from {}", config.input);
    let input = config.input.read()?;
    let executor = Executor::new(input, &config);

    if !config.quiet {
        println!("Running {} part(s)...", executor.parts().len());
    }
    run_executor(executor, config.quiet)
}

/// Run the executor and print outcomes as they arrive
fn run_executor(executor: Executor, quiet: bool) -> Result<(), CliError> {
    let (tx, rx) = std::sync::mpsc::channel();

    // Run executor in background thread
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut outcomes = Vec::new();
    for outcome in rx {
        formatter.print_outcome(&outcome);
        outcomes.push(outcome);
    }

    executor_handle
        .join()
        .map_err(|_| ExecutorError::Panicked)??;

    formatter.print_summary(&outcomes);

    // Report the first failing part
    outcomes
        .into_iter()
        .map(|outcome| outcome.into_answer().map(|_| ()))
        .find(Result::is_err)
        .unwrap_or(Ok(()))
}
