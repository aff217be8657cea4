//! Top-level help rendering.
//!
//! The overview enumerates every registered task, which is different from a
//! single task's own help: the dispatcher renders the overview when the
//! literal task `help` is requested, and a task's own help when the global
//! `help` flag is set.

use crate::config::Configuration;
use crate::error::Result;
use crate::task::Task;

/// Render the registry-level overview: usage, flags, and all known tasks.
pub fn overview(config: &Configuration) {
    println!("Usage: dispatch [task ...] [-flag] [-name=value]");
    println!();
    println!("Flags:");
    println!("  -h, -help              show task usage instead of running");
    println!("  -v, -verbose           verbose output");
    println!("  -dry-run, -dr, -dry    print commands without executing them");
    println!();
    println!("Tasks:");

    let verbosity = if config.has_flag("verbose") { 1 } else { 0 };
    for task in config.tasks().values() {
        task.help(verbosity, false);
    }
}

/// The builtin `help` task, always present in the registry.
pub struct HelpTask;

impl Task for HelpTask {
    fn run(&self, config: &Configuration) -> Result<()> {
        overview(config);
        Ok(())
    }

    fn help(&self, _verbosity: u8, top_level: bool) {
        if top_level {
            println!("help - list available tasks");
        } else {
            println!("  {:<16} {}", "help", "list available tasks");
        }
    }
}
