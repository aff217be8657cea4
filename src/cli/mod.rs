//! Argument classification for dispatch.
//!
//! The classifier turns the raw process argument list (excluding the program
//! name) into an [`InvocationContext`]. There is no subcommand structure;
//! instead a small fixed grammar is applied left to right over each token:
//!
//! - A token not starting with `-` and containing no `=` is a positional
//!   task name. Order is execution order and duplicates are preserved.
//! - A bare `name=value` token is a param assignment, same as `-name=value`.
//! - A token starting with `-` is a flag or param token. Exactly one leading
//!   `-` is stripped, the remainder is split on the first `=`, and the name
//!   part is looked up in the flag alias table. Known aliases record flag
//!   presence (any `=value` suffix is discarded); anything else is a
//!   `name=value` param. A second leading hyphen on a non-alias token is
//!   always rejected.
//! - Zero positional tokens defaults the request to the single task `help`.
//!
//! Classification is a pure function of its input: identical argument lists
//! always produce identical contexts.

use crate::context::InvocationContext;
use crate::error::{DispatchError, Result};

/// Fixed flag alias table: accepted spelling to normalized name.
const FLAG_ALIASES: &[(&str, &str)] = &[
    ("h", "help"),
    ("help", "help"),
    ("v", "verbose"),
    ("verbose", "verbose"),
    ("dry-run", "dry-run"),
    ("dr", "dry-run"),
    ("dryrun", "dry-run"),
    ("dry", "dry-run"),
];

/// Resolve a hyphen-stripped token name against the alias table.
fn normalize_flag(name: &str) -> Option<&'static str> {
    FLAG_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, normalized)| *normalized)
}

/// Classify raw process arguments into an invocation context.
///
/// Fails on the first unclassifiable token; a parse error aborts the whole
/// invocation before any task runs.
pub fn classify<I, S>(args: I) -> Result<InvocationContext>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut context = InvocationContext::default();

    for arg in args {
        let arg = arg.as_ref();

        let (rest, hyphenated) = match arg.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (arg, false),
        };

        if !hyphenated && !rest.contains('=') {
            context.requested_tasks.push(arg.to_string());
            continue;
        }

        if rest.matches('=').count() > 1 {
            return Err(DispatchError::MultipleEquals(rest.to_string()));
        }

        let (name, value) = match rest.split_once('=') {
            Some((name, value)) => (name, value),
            None => (rest, ""),
        };

        let alias = if hyphenated { normalize_flag(name) } else { None };

        if let Some(flag) = alias {
            // Presence only; an `=value` suffix on a flag alias is discarded.
            context.flags.insert(flag.to_string());
        } else if hyphenated && rest.starts_with('-') {
            return Err(DispatchError::InvalidParam(rest.to_string()));
        } else {
            // Last write wins for repeated param names.
            context.params.insert(name.to_string(), value.to_string());
        }
    }

    if context.requested_tasks.is_empty() {
        context.requested_tasks.push("help".to_string());
    }

    Ok(context)
}
