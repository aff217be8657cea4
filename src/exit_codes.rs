//! Exit code constants for the dispatch CLI.
//!
//! - 0: Success
//! - 1: Parse failure (bad flag/param token)
//! - 2: Dispatch failure (unknown task)
//! - 3: Task execution failure
//! - 4: Manifest failure (unreadable or invalid dispatch.yaml)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Parse failure: a flag/param token could not be classified.
pub const PARSE_FAILURE: i32 = 1;

/// Dispatch failure: a requested task is not in the registry.
pub const DISPATCH_FAILURE: i32 = 2;

/// Task execution failure: a task's command could not run or exited non-zero.
pub const TASK_FAILURE: i32 = 3;

/// Manifest failure: dispatch.yaml could not be read or did not validate.
pub const MANIFEST_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            PARSE_FAILURE,
            DISPATCH_FAILURE,
            TASK_FAILURE,
            MANIFEST_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
