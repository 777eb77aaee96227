#[cfg(test)]
#[path = "../../tests/unit/solver/worker_test.rs"]
mod worker_test;

use super::Deadline;
use super::strategies::{AllocationContext, AllocationStrategy};
use crate::checker::score_period;
use crate::models::{Instance, Solution};
use crate::utils::{DefaultRandom, GenericResult, InfoLogger};

/// Specifies settings of one worker.
#[derive(Clone, Debug)]
pub struct WorkerSettings {
    /// Worker index, also used to derive its seed.
    pub idx: usize,
    /// A seed of the worker random generator. Entropy is used when not set.
    pub seed: Option<u64>,
    /// Max amount of construction attempts.
    pub max_iterations: usize,
}

/// A result reported by a worker.
#[derive(Clone, Debug, Default)]
pub struct WorkerResult {
    /// The best solution built, possibly partial when the deadline fired.
    pub solution: Solution,
    /// A self-reported objective of the solution, computed by the scorer.
    pub objective: f64,
    /// False when the strategy failed with an unrecoverable fault.
    pub success: bool,
    /// Amount of attempts started.
    pub iterations: usize,
}

/// Runs a worker: repeats construction attempts until `max_iterations` is exhausted or the
/// deadline fires and keeps the attempt with the strictly greatest objective. A complete attempt
/// is never replaced by one interrupted by the deadline.
///
/// The first attempt always starts, even when the deadline has already fired, so a successful
/// worker returns at least an empty solution.
pub fn run_worker(
    instance: &Instance,
    deadline: &Deadline,
    strategy: &(dyn AllocationStrategy + Send + Sync),
    settings: &WorkerSettings,
    logger: &InfoLogger,
) -> WorkerResult {
    let random = DefaultRandom::new_with_seed(settings.seed);
    let ctx = AllocationContext { instance, random: &random, worker_idx: settings.idx };

    (logger)(&format!("[framework] worker {} started", settings.idx));

    let mut result = WorkerResult { success: true, ..WorkerResult::default() };
    let mut best: Option<(Solution, f64, bool)> = None;

    while result.iterations < settings.max_iterations.max(1) && (result.iterations == 0 || !deadline.is_expired()) {
        result.iterations += 1;

        match run_attempt(&ctx, deadline, strategy) {
            Ok((solution, objective)) => {
                let is_complete = solution.is_complete(instance);
                if best.as_ref().is_none_or(|incumbent| is_better(is_complete, objective, incumbent)) {
                    best = Some((solution, objective, is_complete));
                }
            }
            Err(err) => {
                (logger)(&format!("[framework] worker {} failed: {err}", settings.idx));
                result.success = false;
                break;
            }
        }
    }

    if let Some((solution, objective, _)) = best {
        result.solution = solution;
        result.objective = objective;
    }

    (logger)(&format!(
        "[framework] worker {} finished: objective {:.4}, iterations {}, success {}",
        settings.idx, result.objective, result.iterations, result.success
    ));

    result
}

/// A complete attempt always wins over an interrupted one, otherwise the objective must be strictly greater.
fn is_better(is_complete: bool, objective: f64, incumbent: &(Solution, f64, bool)) -> bool {
    let &(_, best_objective, is_best_complete) = incumbent;

    match (is_complete, is_best_complete) {
        (true, false) => true,
        (false, true) => false,
        _ => objective > best_objective,
    }
}

/// Builds a solution period by period, checking the deadline before each period.
fn run_attempt(
    ctx: &AllocationContext,
    deadline: &Deadline,
    strategy: &(dyn AllocationStrategy + Send + Sync),
) -> GenericResult<(Solution, f64)> {
    let instance = ctx.instance;
    let mut solution = Solution::with_capacity(instance.period_count);
    let mut objective = 0.;

    for period in 0..instance.period_count {
        if deadline.is_expired() {
            break;
        }

        let delivery = strategy.allocate(ctx, period, &solution)?;
        objective += score_period(instance, period, delivery.vehicle_deliveries.as_slice());
        solution.deliveries.push(delivery);
    }

    Ok((solution, objective))
}
