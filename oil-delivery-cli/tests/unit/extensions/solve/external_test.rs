use super::*;
use oil_delivery_core::checker::CheckerFlag;

#[cfg(unix)]
fn create_checker_script(dir: &Path, body: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("checker.sh");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();

    path
}

#[cfg(unix)]
#[test]
fn can_decode_printed_objective() {
    let tmpdir = tempfile::tempdir().unwrap();
    let checker = create_checker_script(tmpdir.path(), "echo 116250\nexit 1");

    let outcome = run_external_checker(&checker, "instance.json", "solution.json", FlagEncoding::Legacy).unwrap();

    assert_eq!(outcome, CheckerOutcome::Feasible { objective: 11.625 });
}

#[cfg(unix)]
#[test]
fn can_decode_printed_flags() {
    let tmpdir = tempfile::tempdir().unwrap();
    let checker = create_checker_script(tmpdir.path(), "echo -9");

    let outcome = run_external_checker(&checker, "instance.json", "solution.json", FlagEncoding::Legacy).unwrap();

    match outcome {
        CheckerOutcome::Infeasible { flags } => assert!(flags.contains(CheckerFlag::CabinOverVolume)),
        outcome => unreachable!("unexpected outcome: {outcome:?}"),
    }
}

#[cfg(unix)]
#[test]
fn can_fall_back_to_exit_status() {
    let tmpdir = tempfile::tempdir().unwrap();
    let checker = create_checker_script(tmpdir.path(), "exit 42");

    let outcome = run_external_checker(&checker, "instance.json", "solution.json", FlagEncoding::Legacy).unwrap();

    assert_eq!(outcome, CheckerOutcome::Feasible { objective: 0.0042 });
}

#[test]
fn can_fail_on_missing_checker() {
    let tmpdir = tempfile::tempdir().unwrap();
    let checker = tmpdir.path().join("no-checker");

    assert!(run_external_checker(&checker, "instance.json", "solution.json", FlagEncoding::Legacy).is_err());
}
