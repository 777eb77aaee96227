//! Contains allocation strategies which fill one period of a solution.

mod constructive;
pub use self::constructive::ConstructiveAllocation;

mod random;
pub use self::random::RandomAllocation;

use crate::models::{Instance, PeriodDelivery, Solution};
use crate::utils::{GenericResult, Random};

/// Keeps data available to a strategy while it allocates deliveries.
pub struct AllocationContext<'a> {
    /// The instance being solved.
    pub instance: &'a Instance,
    /// A random generator owned by the worker.
    pub random: &'a dyn Random,
    /// Index of the worker which runs the strategy.
    pub worker_idx: usize,
}

/// Allocates deliveries of one period.
///
/// A strategy is shared by all workers and must not keep mutable state: everything it needs
/// comes from the context and from periods already present in the partial solution.
pub trait AllocationStrategy {
    /// Returns strategy name used in logs and submissions.
    fn name(&self) -> &str;

    /// Returns deliveries for given period. `solution` holds all previous periods.
    /// An error is treated as an unrecoverable fault of the worker.
    fn allocate(&self, ctx: &AllocationContext, period: usize, solution: &Solution) -> GenericResult<PeriodDelivery>;
}
