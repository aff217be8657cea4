//! Configuration model for dispatch.
//!
//! The configuration joins the externally-discovered task registry with the
//! invocation context. It is a pure join: no validation happens here beyond
//! what the registry and context already guarantee. Built once per
//! invocation, read-only afterward, and passed by reference to every task.

use crate::context::InvocationContext;
use crate::task::{Task, TaskRegistry};
use std::collections::BTreeMap;

/// The per-invocation configuration: task registry plus parsed context.
pub struct Configuration {
    tasks: TaskRegistry,
    context: InvocationContext,
}

impl Configuration {
    /// Join a task registry with an invocation context.
    pub fn new(tasks: TaskRegistry, context: InvocationContext) -> Self {
        Self { tasks, context }
    }

    /// Check whether a normalized flag was set on this invocation.
    pub fn has_flag(&self, name: &str) -> bool {
        self.context.has_flag(name)
    }

    /// Look up a registered task by name.
    pub fn task(&self, name: &str) -> Option<&dyn Task> {
        self.tasks.get(name).map(Box::as_ref)
    }

    /// All registered tasks, ordered by name.
    pub fn tasks(&self) -> &TaskRegistry {
        &self.tasks
    }

    /// Requested task names in execution order, duplicates preserved.
    pub fn requested_tasks(&self) -> &[String] {
        &self.context.requested_tasks
    }

    /// Look up a parameter value by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.context.param(name)
    }

    /// All parameters, ordered by name.
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.context.params
    }
}
