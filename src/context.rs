//! Invocation context for dispatch.
//!
//! The context is the parsed representation of one process invocation. It is
//! constructed once by the argument classifier, never mutated afterward, and
//! owned by the [`Configuration`](crate::config::Configuration) for the
//! remainder of the run. It is threaded explicitly through every operation;
//! there is no process-global state.

use std::collections::{BTreeMap, BTreeSet};

/// The immutable parse result of one process invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationContext {
    /// Requested task names in execution order.
    ///
    /// Insertion order is execution order. Duplicates are preserved: a task
    /// requested twice runs twice. Never empty after classification (an empty
    /// request defaults to `["help"]`).
    pub requested_tasks: Vec<String>,

    /// Normalized flag names. Membership only, no values.
    ///
    /// Every entry is a normalized name from the fixed alias table
    /// (`help`, `verbose`, `dry-run`); unrecognized flags are parse errors,
    /// never silently recorded.
    pub flags: BTreeSet<String>,

    /// Parameter name to raw string value.
    ///
    /// Values are never coerced. If the same name is supplied more than once,
    /// the last occurrence wins.
    pub params: BTreeMap<String, String>,
}

impl InvocationContext {
    /// Check whether a normalized flag is set.
    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }

    /// Look up a parameter value by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_flag_checks_membership() {
        let mut ctx = InvocationContext::default();
        ctx.flags.insert("verbose".to_string());

        assert!(ctx.has_flag("verbose"));
        assert!(!ctx.has_flag("help"));
    }

    #[test]
    fn param_returns_raw_value() {
        let mut ctx = InvocationContext::default();
        ctx.params
            .insert("target".to_string(), "release".to_string());

        assert_eq!(ctx.param("target"), Some("release"));
        assert_eq!(ctx.param("missing"), None);
    }
}
