//! The dispatcher: runs requested tasks in order.
//!
//! Execution is strictly sequential, in request order, duplicates included.
//! Each name is resolved immediately before it runs; the first unresolved
//! name aborts the whole invocation. There is no retry and no rollback:
//! tasks that already ran stay ran.

use crate::config::Configuration;
use crate::error::{DispatchError, Result};
use crate::help;
use tracing::debug;

/// Execute every requested task against the configuration.
///
/// For each requested name:
/// 1. Resolve it in the registry; unknown names are terminal.
/// 2. The literal name `help` renders the registry-level overview.
/// 3. Otherwise the global `help` flag selects the task's own help over
///    its execution.
pub fn dispatch(config: &Configuration) -> Result<()> {
    for name in config.requested_tasks() {
        let Some(task) = config.task(name) else {
            return Err(DispatchError::UnknownTask(name.clone()));
        };

        if name.as_str() == "help" {
            help::overview(config);
            continue;
        }

        if config.has_flag("help") {
            debug!(task = %name, "rendering task help");
            task.help(0, true);
        } else {
            debug!(task = %name, "running task");
            task.run(config)?;
        }
    }

    Ok(())
}
