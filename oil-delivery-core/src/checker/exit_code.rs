//! Packs a check result into a process exit code and back.
//!
//! A positive code is the objective multiplied by [`OBJECTIVE_SCALE`] and truncated, a negative
//! one is the bitwise complement of the error mask. An I/O failure is reported as the complement
//! of an empty mask.
//!
//! Zero is decoded as a feasible solution with zero objective rather than as the complement of an
//! all-ones mask: a feasible solution with an objective below `1 / OBJECTIVE_SCALE` packs to zero.

#[cfg(test)]
#[path = "../../tests/unit/checker/exit_code_test.rs"]
mod exit_code_test;

use super::{CheckResult, CheckerFlags, FlagEncoding};

/// A multiplier applied to the objective before truncation.
pub const OBJECTIVE_SCALE: f64 = 10000.;

/// An outcome decoded from a packed exit code.
#[derive(Clone, Debug, PartialEq)]
pub enum CheckerOutcome {
    /// The solution is feasible, objective precision is limited by the scale.
    Feasible {
        /// Objective value.
        objective: f64,
    },
    /// The solution violates constraints.
    Infeasible {
        /// Reported violations.
        flags: CheckerFlags,
    },
    /// The checker was not able to read its inputs.
    IoError,
}

/// Packs a check result into an exit code.
pub fn encode_exit_code(result: &CheckResult, encoding: FlagEncoding) -> i32 {
    if result.is_feasible() {
        // NOTE `as` truncates towards zero and saturates on overflow
        (result.objective * OBJECTIVE_SCALE) as i32
    } else {
        !result.flags.to_mask(encoding)
    }
}

/// Returns an exit code which reports inability to read inputs.
pub fn io_error_exit_code() -> i32 {
    !0
}

/// Unpacks an exit code. Zero is treated as a feasible solution with zero objective.
pub fn decode_exit_code(code: i32, encoding: FlagEncoding) -> CheckerOutcome {
    match code {
        code if code >= 0 => CheckerOutcome::Feasible { objective: code as f64 / OBJECTIVE_SCALE },
        code => match !code {
            0 => CheckerOutcome::IoError,
            mask => CheckerOutcome::Infeasible { flags: CheckerFlags::from_mask(mask, encoding) },
        },
    }
}
