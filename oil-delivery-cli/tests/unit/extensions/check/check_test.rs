use super::*;
use crate::helpers::*;
use oil_delivery_core::checker::CheckerFlags;
use std::fs::File;
use std::sync::{Arc, Mutex};

fn check_files(instance_path: &str, solution_path: &str) -> Result<CheckResult, Vec<GenericError>> {
    let logger: InfoLogger = Arc::new(|_: &str| {});

    check_solution_files(
        BufReader::new(File::open(instance_path).unwrap()),
        BufReader::new(File::open(solution_path).unwrap()),
        &logger,
    )
}

#[test]
fn can_check_feasible_solution() {
    let result = check_files(INSTANCE_PATH, SOLUTION_PATH).unwrap();

    assert!(result.is_feasible());
    assert_float_eq!(result.objective, SOLUTION_OBJECTIVE);
}

#[test]
fn can_check_infeasible_solution() {
    let result = check_files(INSTANCE_PATH, INFEASIBLE_SOLUTION_PATH).unwrap();

    assert!(!result.is_feasible());
    assert!(result.flags.contains(CheckerFlag::CabinOverVolume));
    assert!(result.flags.contains(CheckerFlag::StationOverDemand));
    assert!(result.flags.contains(CheckerFlag::StationOverTime));
    assert!(!result.flags.contains(CheckerFlag::VehicleDispatch));
}

#[test]
fn can_report_malformed_solution_as_format_error() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };

    let result = check_solution_files(
        BufReader::new(File::open(INSTANCE_PATH).unwrap()),
        BufReader::new("{}\nnot a json".as_bytes()),
        &logger,
    )
    .unwrap();

    assert_eq!(result.flags, CheckerFlags::from(CheckerFlag::Format));
    assert!(messages.lock().unwrap().iter().all(|msg| msg.starts_with("[checker]")));
    assert_eq!(messages.lock().unwrap().len(), 2);
}

#[test]
fn can_fail_on_malformed_instance() {
    let errors = check_files(SOLUTION_PATH, SOLUTION_PATH).unwrap_err();

    assert!(errors[0].to_string().starts_with("cannot deserialize instance"));
}

parameterized_test! {can_describe_check_result, (flags, objective, zero_demand_deliveries, expected), {
    let result = CheckResult { flags, objective, zero_demand_deliveries };

    assert_eq!(describe_check_result(&result), expected);
}}

can_describe_check_result! {
    case01_feasible: (CheckerFlags::default(), 1.5, 0, "solution is feasible, objective: 1.5000"),
    case02_zero_demand: (CheckerFlags::default(), 2., 3,
        "solution is feasible, objective: 2.0000, deliveries to zero demand stations: 3"),
}

#[test]
fn can_describe_infeasible_result() {
    let result = CheckResult { flags: CheckerFlag::Format.into(), ..CheckResult::default() };

    assert!(describe_check_result(&result).starts_with("solution is infeasible: "));
}
