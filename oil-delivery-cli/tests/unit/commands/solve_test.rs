use super::*;
use crate::helpers::*;
use oil_delivery_core::checker::check_solution;
use oil_delivery_core::format::{deserialize_instance, deserialize_solution, deserialize_submission};
use std::fs::File;

fn get_solve_matches(params: &[&str]) -> ArgMatches {
    let args = [&["solve"], params].concat();

    get_solve_app().try_get_matches_from(args).unwrap()
}

fn read_instance() -> oil_delivery_core::models::Instance {
    deserialize_instance(BufReader::new(File::open(INSTANCE_PATH).unwrap()), false).unwrap()
}

#[test]
fn can_solve_instance_with_iteration_limit() {
    let solution_file = tempfile::NamedTempFile::new().unwrap();
    let solution_path = solution_file.path().to_str().unwrap();
    let matches =
        get_solve_matches(&["-i", INSTANCE_PATH, "-o", solution_path, "-n", "5", "-j", "2", "--seed", "1", "--check"]);

    run_solve(&matches).unwrap();

    let solution = deserialize_solution(BufReader::new(File::open(solution_path).unwrap())).unwrap();
    let submission = deserialize_submission(BufReader::new(File::open(solution_path).unwrap())).unwrap();
    assert!(check_solution(&read_instance(), &solution).is_feasible());
    assert_eq!(submission.algorithm, "constructive");
    assert_eq!(submission.author, "anonymous");
    assert_eq!(submission.instance, INSTANCE_PATH);
}

#[test]
fn can_solve_instance_with_config_and_time_limit() {
    let solution_file = tempfile::NamedTempFile::new().unwrap();
    let solution_path = solution_file.path().to_str().unwrap();
    let args = ["-i", INSTANCE_PATH, "-o", solution_path, "-c", CONFIG_PATH, "-t", "0.6", "--author", "tester"];
    let matches = get_solve_matches(&args);

    run_solve(&matches).unwrap();

    let submission = deserialize_submission(BufReader::new(File::open(solution_path).unwrap())).unwrap();
    assert_eq!(submission.author, "tester");
}

#[test]
fn can_take_paths_from_environment_file() {
    let tmpdir = tempfile::tempdir().unwrap();
    let solution_path = tmpdir.path().join("solution.json");
    let environment_path = tmpdir.path().join("environment.json");
    let environment = format!(
        r#"{{ "instancePath": "{INSTANCE_PATH}", "solutionPath": "{}", "maxIterations": 2, "randSeed": 3 }}"#,
        solution_path.to_str().unwrap()
    );
    std::fs::write(&environment_path, environment).unwrap();
    let matches = get_solve_matches(&["--environment", environment_path.to_str().unwrap()]);

    run_solve(&matches).unwrap();

    assert!(solution_path.exists());
}

#[test]
fn can_append_audit_record() {
    let tmpdir = tempfile::tempdir().unwrap();
    let solution_path = tmpdir.path().join("solution.json");
    let log_path = tmpdir.path().join("audit.csv");
    let solution_path = solution_path.to_str().unwrap();
    let log_path_str = log_path.to_str().unwrap();
    let matches = get_solve_matches(&[
        "-i",
        INSTANCE_PATH,
        "-o",
        solution_path,
        "-n",
        "1",
        "--run-id",
        "run-1",
        "--log-path",
        log_path_str,
    ]);

    run_solve(&matches).unwrap();
    run_solve(&matches).unwrap();

    let content = std::fs::read_to_string(&log_path).unwrap();
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Time,ID,Instance,Feasible"));
    assert!(lines[1].contains(",run-1,"));
}

#[test]
fn can_require_instance_path() {
    let solution_file = tempfile::NamedTempFile::new().unwrap();
    let matches = get_solve_matches(&["-o", solution_file.path().to_str().unwrap()]);

    assert_eq!(run_solve(&matches).unwrap_err(), "instance path is not specified");
}

#[test]
fn can_require_solution_path() {
    let matches = get_solve_matches(&["-i", INSTANCE_PATH]);

    assert_eq!(run_solve(&matches).unwrap_err(), "solution path is not specified");
}

#[test]
fn can_reject_zero_iterations() {
    let solution_file = tempfile::NamedTempFile::new().unwrap();
    let matches = get_solve_matches(&["-i", INSTANCE_PATH, "-o", solution_file.path().to_str().unwrap(), "-n", "0"]);

    assert!(run_solve(&matches).unwrap_err().starts_with("cannot build solver"));
}

#[test]
fn can_accept_negative_jobs() {
    let args = vec!["solve", "-i", INSTANCE_PATH, "-j", "-1"];

    get_solve_app().try_get_matches_from(args).unwrap();
}

#[test]
fn can_merge_arguments_over_environment_file() {
    let tmpdir = tempfile::tempdir().unwrap();
    let environment_path = tmpdir.path().join("environment.json");
    std::fs::write(&environment_path, r#"{ "instancePath": "a.json", "randSeed": 3, "jobs": 4 }"#).unwrap();
    let matches = get_solve_matches(&["--environment", environment_path.to_str().unwrap(), "-i", "b.json", "-j", "2"]);

    let config = get_environment_config(&matches).unwrap();

    assert_eq!(config.instance_path.as_deref(), Some("b.json"));
    assert_eq!(config.rand_seed, Some(3));
    assert_eq!(config.jobs, Some(2));
}

#[test]
fn can_report_infeasible_check_outcome() {
    let result = SearchResult {
        solution: Default::default(),
        objective: SOLUTION_OBJECTIVE,
        worker_idx: 1,
        iterations: 1,
    };
    let flags = oil_delivery_core::checker::CheckerFlag::CabinOverVolume.into();

    let err = report_check_outcome(&result, CheckerOutcome::Infeasible { flags }, "").unwrap_err();

    assert!(err.starts_with("strategy produced an infeasible solution"));
}
