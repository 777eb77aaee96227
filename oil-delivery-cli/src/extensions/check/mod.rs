//! Checks solution files against instance files.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/check/check_test.rs"]
mod check_test;

use oil_delivery_core::checker::{CheckResult, CheckerFlag, check_solution};
use oil_delivery_core::format::{deserialize_instance, deserialize_solution};
use oil_delivery_core::utils::{GenericError, InfoLogger};
use std::io::{BufReader, Read};

/// Reads instance and solution and checks the solution.
///
/// An unreadable instance is an error. A malformed solution is reported as a format violation,
/// the same way as a solution with a wrong amount of periods.
pub fn check_solution_files<I: Read, S: Read>(
    instance_reader: BufReader<I>,
    solution_reader: BufReader<S>,
    logger: &InfoLogger,
) -> Result<CheckResult, Vec<GenericError>> {
    let instance = deserialize_instance(instance_reader, false)?;

    let result = match deserialize_solution(solution_reader) {
        Ok(solution) => check_solution(&instance, &solution),
        Err(err) => {
            (logger)(&format!("[checker] {err}"));
            CheckResult { flags: CheckerFlag::Format.into(), ..CheckResult::default() }
        }
    };

    (logger)(&format!("[checker] {}", describe_check_result(&result)));

    Ok(result)
}

/// Returns a human readable description of the check result.
pub fn describe_check_result(result: &CheckResult) -> String {
    let mut description = if result.is_feasible() {
        format!("solution is feasible, objective: {:.4}", result.objective)
    } else {
        format!("solution is infeasible: {}", result.flags)
    };

    if result.zero_demand_deliveries > 0 {
        description.push_str(&format!(", deliveries to zero demand stations: {}", result.zero_demand_deliveries));
    }

    description
}
