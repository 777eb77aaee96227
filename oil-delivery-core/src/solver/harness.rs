#[cfg(test)]
#[path = "../../tests/unit/solver/harness_test.rs"]
mod harness_test;

use super::strategies::AllocationStrategy;
use super::{Deadline, WorkerResult, WorkerSettings, run_worker};
use crate::checker::{CheckResult, check_solution};
use crate::models::{Instance, Solution};
use crate::utils::{GenericResult, InfoLogger, ThreadPool, parallel_into_collect};
use std::sync::Arc;

/// A result of the search.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// The winning solution.
    pub solution: Solution,
    /// A self-reported objective of the winner.
    pub objective: f64,
    /// Index of the winning worker.
    pub worker_idx: usize,
    /// Amount of attempts made by the winning worker.
    pub iterations: usize,
}

/// Runs independent workers in parallel and selects the best result.
pub struct SearchHarness {
    instance: Arc<Instance>,
    strategy: Arc<dyn AllocationStrategy + Send + Sync>,
    deadline: Deadline,
    logger: InfoLogger,
    seed: Option<u64>,
    max_iterations: usize,
}

impl SearchHarness {
    /// Creates a new instance of `SearchHarness`.
    pub fn new(
        instance: Arc<Instance>,
        strategy: Arc<dyn AllocationStrategy + Send + Sync>,
        deadline: Deadline,
        logger: InfoLogger,
    ) -> Self {
        Self { instance, strategy, deadline, logger, seed: None, max_iterations: 1 }
    }

    /// Sets a base seed: worker `i` uses `seed + i`.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets max amount of attempts per worker.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    /// Runs `worker_count` workers on a dedicated pool, waits for all of them and returns the
    /// best successful result. Returns `Ok(None)` when no worker succeeded.
    pub fn solve(&self, worker_count: usize) -> GenericResult<Option<SearchResult>> {
        let worker_count = worker_count.max(1);
        let pool = ThreadPool::new(worker_count)?;

        let settings = (0..worker_count)
            .map(|idx| WorkerSettings {
                idx,
                seed: self.seed.map(|seed| seed.wrapping_add(idx as u64)),
                max_iterations: self.max_iterations,
            })
            .collect::<Vec<_>>();

        (self.logger)(&format!(
            "[framework] starting {worker_count} workers with '{}' strategy",
            self.strategy.name()
        ));

        let results = pool.execute(|| {
            parallel_into_collect(settings, |settings| {
                run_worker(&self.instance, &self.deadline, self.strategy.as_ref(), &settings, &self.logger)
            })
        });

        let best = select_best(results);

        match &best {
            Some(best) => (self.logger)(&format!(
                "[framework] best solution collected from worker {} with objective {:.4}",
                best.worker_idx, best.objective
            )),
            None => (self.logger)("[framework] no worker succeeded"),
        }

        Ok(best)
    }
}

/// Selects the successful result with the strictly greatest objective. The first successful
/// result is the initial incumbent, so ties keep the lowest worker index.
pub fn select_best(results: Vec<WorkerResult>) -> Option<SearchResult> {
    results.into_iter().enumerate().filter(|(_, result)| result.success).fold(None, |best, (worker_idx, result)| {
        match best {
            Some(SearchResult { objective, .. }) if result.objective <= objective => best,
            _ => Some(SearchResult {
                solution: result.solution,
                objective: result.objective,
                worker_idx,
                iterations: result.iterations,
            }),
        }
    })
}

/// Re-validates a solution with the full checker.
pub fn verify(instance: &Instance, solution: &Solution) -> CheckResult {
    check_solution(instance, solution)
}
