//! Exit codes for a finished run.

use convmul_core::exit_codes;

use crate::experiment::Summary;

/// Map a run summary to the process exit code.
///
/// Only the exact backend can fail a run; complex-backend failures are
/// its documented precision limit.
#[must_use]
pub fn exit_code(summary: &Summary) -> i32 {
    if summary.exact_failures > 0 {
        exit_codes::ERROR_MISMATCH
    } else if summary.exact_errors > 0 {
        exit_codes::ERROR_GENERIC
    } else {
        exit_codes::SUCCESS
    }
}
