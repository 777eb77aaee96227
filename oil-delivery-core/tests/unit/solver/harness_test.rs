use super::*;
use crate::helpers::models::*;
use crate::helpers::solver::*;
use crate::helpers::utils::*;
use crate::solver::Deadline;

fn create_harness(strategy: Arc<dyn AllocationStrategy + Send + Sync>) -> SearchHarness {
    SearchHarness::new(Arc::new(create_example_instance()), strategy, Deadline::unbounded(), create_noop_logger())
        .with_seed(Some(0))
}

fn create_worker_result(objective: f64, success: bool) -> WorkerResult {
    WorkerResult { solution: Solution::default(), objective, success, iterations: 1 }
}

parameterized_test! {can_select_best_result, (results, expected), {
    let results = results.into_iter().map(|(objective, success)| create_worker_result(objective, success)).collect();

    let actual = select_best(results).map(|result| (result.worker_idx, result.objective));

    assert_eq!(actual, expected);
}}

can_select_best_result! {
    case01_empty: (Vec::<(f64, bool)>::new(), None),
    case02_single: (vec![(0., true)], Some((0, 0.))),
    case03_greatest: (vec![(1., true), (3., true), (2., true)], Some((1, 3.))),
    case04_tie_keeps_first: (vec![(2., true), (2., true)], Some((0, 2.))),
    case05_skip_failed: (vec![(5., false), (1., true)], Some((1, 1.))),
    case06_all_failed: (vec![(5., false), (1., false)], None),
}

#[test]
fn can_return_single_worker_result() {
    let strategy = Arc::new(WorkerDependentStrategy { quantities: vec![5] });
    let harness = create_harness(strategy.clone());
    let instance = create_example_instance();

    let result = harness.solve(1).expect("cannot solve").expect("no solution");

    let settings = WorkerSettings { idx: 0, seed: Some(0), max_iterations: 1 };
    let expected = run_worker(&instance, &Deadline::unbounded(), strategy.as_ref(), &settings, &create_noop_logger());
    assert_eq!(result.worker_idx, 0);
    assert_eq!(result.solution, expected.solution);
    assert_float_eq!(result.objective, expected.objective);
}

#[test]
fn can_select_worker_with_greatest_objective() {
    let harness = create_harness(Arc::new(WorkerDependentStrategy { quantities: vec![1, 3, 2] }));

    let result = harness.solve(3).expect("cannot solve").expect("no solution");

    assert_eq!(result.worker_idx, 1);
}

#[test]
fn can_exclude_failed_workers() {
    let harness = create_harness(Arc::new(FailingStrategy {
        failing: vec![1],
        inner: WorkerDependentStrategy { quantities: vec![1, 3, 2] },
    }));

    let result = harness.solve(3).expect("cannot solve").expect("no solution");

    assert_eq!(result.worker_idx, 2);
}

#[test]
fn can_return_none_when_all_workers_failed() {
    let harness = create_harness(Arc::new(FailingStrategy {
        failing: vec![0, 1],
        inner: WorkerDependentStrategy { quantities: vec![1] },
    }));

    assert!(harness.solve(2).expect("cannot solve").is_none());
}

#[test]
fn can_verify_winner() {
    let instance = create_example_instance();
    let harness = create_harness(Arc::new(crate::solver::strategies::ConstructiveAllocation::default()));

    let result = harness.solve(4).expect("cannot solve").expect("no solution");
    let check = verify(&instance, &result.solution);

    assert!(check.is_feasible());
    assert_float_eq!(check.objective, result.objective);
}
