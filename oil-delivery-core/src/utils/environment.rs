#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use super::{Quota, TimeQuota};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Time reserved for writing the solution out, subtracted from the time budget.
pub const SAVE_SOLUTION_RESERVE_MS: u64 = 500;

/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}

/// Keeps track of environment specific information which influences the search.
#[derive(Clone)]
pub struct Environment {
    /// A seed used to create repeatable random generators, one per worker.
    pub seed: Option<u64>,

    /// Amount of parallel jobs available for the search.
    pub jobs: usize,

    /// An information logger.
    pub logger: InfoLogger,

    /// A global quota which stops the search when reached.
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,
}

impl Environment {
    /// Creates an environment which stops the search after `max_time_ms` milliseconds.
    pub fn new_with_time_quota(max_time_ms: Option<u64>) -> Self {
        Self {
            quota: max_time_ms.map::<Arc<dyn Quota + Send + Sync>, _>(|ms| Arc::new(TimeQuota::new(ms as f64 / 1000.))),
            ..Self::default()
        }
    }

    /// Returns a copy of the environment with given logger.
    pub fn with_logger(self, logger: InfoLogger) -> Self {
        Self { logger, ..self }
    }

    /// Returns a copy of the environment with given seed.
    pub fn with_seed(self, seed: Option<u64>) -> Self {
        Self { seed, ..self }
    }

    /// Returns a copy of the environment with given amount of jobs calibrated against available CPUs.
    pub fn with_jobs(self, jobs: Option<i64>) -> Self {
        Self { jobs: calibrate_jobs(jobs, get_cpus()), ..self }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self { seed: None, jobs: get_cpus(), logger: Arc::new(|msg| println!("{msg}")), quota: None }
    }
}

/// Replaces a missing, non-positive or too large amount of jobs with the amount of CPUs.
pub fn calibrate_jobs(jobs: Option<i64>, cpus: usize) -> usize {
    let cpus = cpus.max(1);

    match jobs {
        Some(jobs) if jobs > 0 && (jobs as usize) <= cpus => jobs as usize,
        _ => cpus,
    }
}

/// Reduces time budget by the time needed to save the solution, never going below zero.
pub fn calibrate_timeout(timeout_ms: u64) -> u64 {
    timeout_ms.saturating_sub(SAVE_SOLUTION_RESERVE_MS)
}
