use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use components::config::CommandLine;
use components::registry::store::EmployeeStore;
use components::repl::REPL;

mod components;
#[cfg(test)]
mod tests;

fn main() -> ExitCode {
    let args = CommandLine::parse();

    // Logs go to stderr; stdout carries the menu transcript
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_directive()));
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut store = EmployeeStore::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = REPL::new(&mut store, stdin.lock(), stdout.lock(), args.repl_config());
    let result = repl.run();
    drop(repl);

    match result {
        Ok(()) => {
            tracing::info!(records = store.len(), "session ended");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "session aborted");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
