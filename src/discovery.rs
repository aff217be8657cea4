//! Task discovery for dispatch.
//!
//! Discovery runs once at startup and produces the registry the dispatcher
//! resolves requested tasks against. The builtin `help` task is always
//! registered; script tasks come from a `dispatch.yaml` manifest in the
//! working directory, when one exists.
//!
//! # Manifest Format
//!
//! ```yaml
//! tasks:
//!   build:
//!     description: Compile the project
//!     commands:
//!       - cargo build --release
//!   test:
//!     description: Run the test suite
//!     commands:
//!       - cargo test
//! ```
//!
//! Unknown fields in the YAML are ignored for forward compatibility.

use crate::error::{DispatchError, Result};
use crate::help::HelpTask;
use crate::task::{ScriptTask, TaskRegistry};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Manifest file name looked up in the working directory.
pub const MANIFEST_FILE: &str = "dispatch.yaml";

/// The parsed `dispatch.yaml` manifest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Script task definitions keyed by task name.
    ///
    /// Unknown fields elsewhere in the YAML are ignored for forward
    /// compatibility.
    pub tasks: BTreeMap<String, TaskSpec>,
}

/// A single script task definition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskSpec {
    /// One-line description shown in the task overview.
    pub description: String,

    /// Shell commands executed in order.
    pub commands: Vec<String>,
}

impl Manifest {
    /// Load a manifest from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DispatchError::Manifest(format!(
                "failed to read manifest '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a manifest from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let manifest: Manifest = serde_yaml::from_str(yaml)
            .map_err(|e| DispatchError::Manifest(format!("failed to parse manifest: {}", e)))?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Validate task names and commands.
    ///
    /// Rules:
    /// - task names must be non-empty and must not begin with `-` (such a
    ///   name could never be requested; it would classify as a flag token)
    /// - `help` is reserved for the builtin overview task
    /// - command strings must be non-empty
    pub fn validate(&self) -> Result<()> {
        for (name, spec) in &self.tasks {
            if name.is_empty() {
                return Err(DispatchError::Manifest(
                    "manifest validation failed: task names must be non-empty".to_string(),
                ));
            }
            if name.starts_with('-') {
                return Err(DispatchError::Manifest(format!(
                    "manifest validation failed: task name '{}' must not begin with '-'",
                    name
                )));
            }
            if name == "help" {
                return Err(DispatchError::Manifest(
                    "manifest validation failed: 'help' is a reserved task name".to_string(),
                ));
            }
            for command in &spec.commands {
                if command.is_empty() {
                    return Err(DispatchError::Manifest(format!(
                        "manifest validation failed: task '{}' has an empty command",
                        name
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Build the task registry for this invocation.
///
/// Registers the builtin `help` task, then one script task per manifest
/// entry if `dispatch.yaml` exists in the working directory. A missing
/// manifest is not an error; an unreadable or invalid one is.
pub fn discover_tasks() -> Result<TaskRegistry> {
    discover_from(Path::new(MANIFEST_FILE))
}

/// Build the task registry from a specific manifest path.
pub fn discover_from(path: &Path) -> Result<TaskRegistry> {
    let mut registry: TaskRegistry = BTreeMap::new();
    registry.insert("help".to_string(), Box::new(HelpTask));

    if path.exists() {
        let manifest = Manifest::load(path)?;
        for (name, spec) in manifest.tasks {
            let task = ScriptTask::new(name.clone(), spec.description, spec.commands);
            registry.insert(name, Box::new(task));
        }
    }

    Ok(registry)
}
