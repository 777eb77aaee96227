use super::strategies::{AllocationStrategy, ConstructiveAllocation};
use super::{Deadline, SearchHarness, Solver};
use crate::models::Instance;
use crate::utils::{Environment, GenericResult};
use std::sync::Arc;

/// Provides configurable way to build solver.
pub struct Builder {
    instance: Arc<Instance>,
    environment: Arc<Environment>,
    workers: Option<usize>,
    max_iterations: Option<usize>,
    strategy: Option<Arc<dyn AllocationStrategy + Send + Sync>>,
}

impl Builder {
    /// Creates a new instance of `Builder`.
    pub fn new(instance: Arc<Instance>, environment: Arc<Environment>) -> Self {
        Self { instance, environment, workers: None, max_iterations: None, strategy: None }
    }

    /// Sets amount of parallel workers.
    /// Default is amount of jobs specified by environment.
    pub fn with_workers(mut self, workers: Option<usize>) -> Self {
        self.workers = workers;
        self
    }

    /// Sets max amount of attempts per worker.
    /// Default is 1.
    pub fn with_max_iterations(mut self, limit: Option<usize>) -> Self {
        self.max_iterations = limit;
        self
    }

    /// Sets allocation strategy.
    /// Default is constructive allocation.
    pub fn with_strategy(mut self, strategy: Arc<dyn AllocationStrategy + Send + Sync>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Builds solver with parameters specified.
    pub fn build(self) -> GenericResult<Solver> {
        let logger = self.environment.logger.clone();

        let workers = match self.workers {
            Some(0) => return Err("amount of workers must be positive".into()),
            Some(workers) => workers,
            None => self.environment.jobs.max(1),
        };

        let max_iterations = match self.max_iterations {
            Some(0) => return Err("max iterations must be positive".into()),
            Some(limit) => limit,
            None => 1,
        };

        let strategy = self.strategy.unwrap_or_else(|| Arc::new(ConstructiveAllocation::default()));

        (logger)(&format!(
            "[framework] configured to use {workers} workers, max-iterations {max_iterations}, strategy '{}'",
            strategy.name()
        ));

        let harness =
            SearchHarness::new(self.instance, strategy, Deadline::from(self.environment.quota.clone()), logger)
                .with_seed(self.environment.seed)
                .with_max_iterations(max_iterations);

        Ok(Solver { harness, workers })
    }
}
