//! Script tasks: manifest-defined command sequences.
//!
//! A script task is the concrete task kind defined in `dispatch.yaml`: a
//! description plus an ordered list of shell commands. Commands run strictly
//! sequentially; the first spawn failure or non-zero exit fails the task and
//! halts the invocation.
//!
//! Flags change execution, not outcome:
//! - `dry-run` prints each command instead of executing it.
//! - `verbose` echoes each command before running it.
//!
//! Params are passed to child processes as environment variables named
//! `DISPATCH_<NAME>` (uppercased, hyphens mapped to underscores).

use crate::config::Configuration;
use crate::error::{DispatchError, Result};
use crate::task::Task;
use std::process::Command;
use tracing::debug;

/// A task defined by a list of shell commands.
pub struct ScriptTask {
    name: String,
    description: String,
    commands: Vec<String>,
}

impl ScriptTask {
    pub fn new(name: String, description: String, commands: Vec<String>) -> Self {
        Self {
            name,
            description,
            commands,
        }
    }

    fn failed(&self, reason: String) -> DispatchError {
        DispatchError::TaskFailed {
            task: self.name.clone(),
            reason,
        }
    }

    /// Environment variable name for a param, e.g. `target` -> `DISPATCH_TARGET`.
    fn env_name(param: &str) -> String {
        format!("DISPATCH_{}", param.to_uppercase().replace('-', "_"))
    }

    fn run_command(&self, command: &str, config: &Configuration) -> Result<()> {
        let args = shell_words::split(command).map_err(|e| {
            self.failed(format!(
                "failed to parse command '{}': {}. Fix: check for unmatched quotes.",
                command, e
            ))
        })?;

        let Some((program, rest)) = args.split_first() else {
            return Err(self.failed("empty command".to_string()));
        };

        let mut child = Command::new(program);
        child.args(rest);
        for (name, value) in config.params() {
            child.env(Self::env_name(name), value);
        }

        let status = child.status().map_err(|e| {
            self.failed(format!(
                "failed to execute '{}': {}. Fix: ensure the command is installed and in PATH.",
                program, e
            ))
        })?;

        if !status.success() {
            let code = status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            return Err(self.failed(format!("command '{}' exited with status {}", command, code)));
        }

        Ok(())
    }
}

impl Task for ScriptTask {
    fn run(&self, config: &Configuration) -> Result<()> {
        for command in &self.commands {
            if config.has_flag("dry-run") {
                println!("[dry-run] {}", command);
                continue;
            }
            if config.has_flag("verbose") {
                println!("> {}", command);
            }
            debug!(task = %self.name, %command, "running command");
            self.run_command(command, config)?;
        }
        Ok(())
    }

    fn help(&self, verbosity: u8, top_level: bool) {
        if top_level {
            println!("{} - {}", self.name, self.description);
            println!();
            println!("Commands:");
            for command in &self.commands {
                println!("  $ {}", command);
            }
        } else {
            println!("  {:<16} {}", self.name, self.description);
            if verbosity > 0 {
                for command in &self.commands {
                    println!("  {:<16} $ {}", "", command);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::InvocationContext;
    use std::collections::BTreeMap;

    fn make_config(context: InvocationContext) -> Configuration {
        Configuration::new(BTreeMap::new(), context)
    }

    fn make_task(commands: &[&str]) -> ScriptTask {
        ScriptTask::new(
            "build".to_string(),
            "Compile the project".to_string(),
            commands.iter().map(|c| c.to_string()).collect(),
        )
    }

    #[test]
    fn env_name_uppercases_and_maps_hyphens() {
        assert_eq!(ScriptTask::env_name("target"), "DISPATCH_TARGET");
        assert_eq!(ScriptTask::env_name("log-level"), "DISPATCH_LOG_LEVEL");
    }

    #[cfg(unix)]
    #[test]
    fn runs_commands_in_sequence() {
        let task = make_task(&["true", "true"]);
        let config = make_config(InvocationContext::default());
        assert!(task.run(&config).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_fails_the_task() {
        let task = make_task(&["false"]);
        let config = make_config(InvocationContext::default());

        let err = task.run(&config).unwrap_err();
        assert!(matches!(err, DispatchError::TaskFailed { .. }));
        assert!(err.to_string().contains("build"));
    }

    #[cfg(unix)]
    #[test]
    fn first_failure_halts_remaining_commands() {
        // The second command would fail the parse if it ran; it never does.
        let task = make_task(&["false", "\"unmatched"]);
        let config = make_config(InvocationContext::default());

        let err = task.run(&config).unwrap_err();
        assert!(err.to_string().contains("exited with status"));
    }

    #[test]
    fn spawn_failure_fails_the_task() {
        let task = make_task(&["nonexistent_command_xyz_123"]);
        let config = make_config(InvocationContext::default());

        let err = task.run(&config).unwrap_err();
        assert!(err.to_string().contains("failed to execute"));
    }

    #[test]
    fn unparseable_command_fails_the_task() {
        let task = make_task(&["echo \"unmatched"]);
        let config = make_config(InvocationContext::default());

        let err = task.run(&config).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn empty_command_fails_the_task() {
        let task = make_task(&["   "]);
        let config = make_config(InvocationContext::default());

        let err = task.run(&config).unwrap_err();
        assert!(err.to_string().contains("empty command"));
    }

    #[test]
    fn dry_run_skips_execution() {
        // This command would fail if executed; dry-run never spawns it.
        let task = make_task(&["nonexistent_command_xyz_123"]);
        let mut ctx = InvocationContext::default();
        ctx.flags.insert("dry-run".to_string());

        let config = make_config(ctx);
        assert!(task.run(&config).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn params_are_exported_to_the_child_environment() {
        let task = make_task(&["sh -c 'test \"$DISPATCH_TARGET\" = release'"]);
        let mut ctx = InvocationContext::default();
        ctx.params
            .insert("target".to_string(), "release".to_string());

        let config = make_config(ctx);
        assert!(task.run(&config).is_ok());
    }
}
