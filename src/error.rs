//! Error types for the dispatch CLI.
//!
//! Uses thiserror for derive macros. Every variant is terminal for the whole
//! invocation: parsing stops before any task runs, and a dispatch or task
//! failure prevents all later-requested tasks from running without undoing
//! tasks that already ran.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for dispatch operations.
///
/// Each variant maps to a specific exit code via [`DispatchError::exit_code`].
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A flag/param token contained more than one `=` separator.
    #[error("invalid argument '{0}': more than one '='")]
    MultipleEquals(String),

    /// A token began with two hyphens and is not a recognized flag alias.
    #[error("invalid param '-{0}'")]
    InvalidParam(String),

    /// A requested task name is not present in the registry.
    #[error("unknown task '{0}'")]
    UnknownTask(String),

    /// A task's command could not be spawned or exited non-zero.
    #[error("task '{task}' failed: {reason}")]
    TaskFailed { task: String, reason: String },

    /// The task manifest could not be read or did not validate.
    #[error("{0}")]
    Manifest(String),
}

impl DispatchError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::MultipleEquals(_) => exit_codes::PARSE_FAILURE,
            DispatchError::InvalidParam(_) => exit_codes::PARSE_FAILURE,
            DispatchError::UnknownTask(_) => exit_codes::DISPATCH_FAILURE,
            DispatchError::TaskFailed { .. } => exit_codes::TASK_FAILURE,
            DispatchError::Manifest(_) => exit_codes::MANIFEST_FAILURE,
        }
    }
}

/// Result type alias for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
