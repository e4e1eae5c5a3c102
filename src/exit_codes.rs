//! Exit code constants for the lockrec CLI.
//!
//! - 0: Success
//! - 1: User error (bad path, bad options file, missing record or key)
//! - 2: Record file could not be read or decoded
//! - 3: Record file could not be encoded or written
//! - 4: Advisory guard could not be acquired

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: invalid path, invalid options, absent record or metadata key.
pub const USER_ERROR: i32 = 1;

/// Read failure: the record file is unreadable or does not decode.
pub const READ_FAILURE: i32 = 2;

/// Write failure: the record could not be encoded or persisted.
pub const WRITE_FAILURE: i32 = 3;

/// Guard failure: the advisory lock next to the record could not be taken.
pub const GUARD_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, READ_FAILURE, WRITE_FAILURE, GUARD_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }
}
