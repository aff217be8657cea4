//! Dispatch: minimal command-line task dispatcher for repeatable project
//! commands.
//!
//! This is the main entry point for the `dispatch` CLI. It classifies
//! arguments into requested tasks and flags/params, discovers the available
//! tasks, joins both into a read-only configuration, and runs the requested
//! tasks in order. The first failure terminates the process with a
//! non-zero exit code.

mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod discovery;
pub mod error;
pub mod exit_codes;
pub mod help;
mod logging;
pub mod task;

use crate::config::Configuration;
use crate::error::DispatchError;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    logging::init();
    info!("Starting dispatch");

    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run() -> Result<(), DispatchError> {
    let context = cli::classify(std::env::args().skip(1))?;
    let registry = discovery::discover_tasks()?;

    let config = Configuration::new(registry, context);
    commands::dispatch(&config)
}
