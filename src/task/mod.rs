//! Task model for dispatch.
//!
//! A task is a named unit of work resolved from the registry by name. The
//! task set is open-ended and discovered externally, so tasks are trait
//! objects behind exactly two operations: `run` and `help`. The dispatcher
//! never inspects a task's internals.

use crate::config::Configuration;
use crate::error::Result;
use std::collections::BTreeMap;

mod script;

pub use script::ScriptTask;

/// A named unit of work with run and help behavior.
pub trait Task {
    /// Execute the task against the invocation's configuration.
    fn run(&self, config: &Configuration) -> Result<()>;

    /// Render the task's usage.
    ///
    /// `top_level` is set when the task's help was requested directly (via
    /// the global `help` flag); otherwise the task is rendering one line of
    /// the registry overview. Higher `verbosity` includes more detail.
    fn help(&self, verbosity: u8, top_level: bool);
}

/// Registry of available tasks, keyed by unique name.
pub type TaskRegistry = BTreeMap<String, Box<dyn Task>>;
