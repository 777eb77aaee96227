//! Runs a standalone checker as a separate process and decodes its verdict.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/external_test.rs"]
mod external_test;

use oil_delivery_core::checker::{CheckerOutcome, FlagEncoding, decode_exit_code};
use oil_delivery_core::utils::GenericResult;
use std::path::Path;
use std::process::Command;

/// Runs `<checker> check -i <instance> -s <solution>` and decodes the packed code from the first
/// line of its stdout, falling back to the exit status.
pub fn run_external_checker(
    checker: &Path,
    instance_path: &str,
    solution_path: &str,
    encoding: FlagEncoding,
) -> GenericResult<CheckerOutcome> {
    let output = Command::new(checker)
        .args(["check", "-i", instance_path, "-s", solution_path])
        .output()
        .map_err(|err| format!("cannot run checker '{}': '{err}'", checker.display()))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let printed = stdout.lines().next().and_then(|line| line.trim().parse::<i32>().ok());

    let code = printed
        .or_else(|| output.status.code())
        .ok_or_else(|| format!("checker '{}' was terminated without exit code", checker.display()))?;

    Ok(decode_exit_code(code, encoding))
}
