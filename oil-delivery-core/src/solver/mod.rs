//! This module contains the search: a cooperative deadline, workers which build solutions with
//! an injected allocation strategy, and a harness which runs workers in parallel and selects the
//! best result.
//!
//! # Examples
//!
//! ```
//! # use oil_delivery_core::prelude::*;
//! # use std::sync::Arc;
//! let instance = Arc::new(Instance {
//!     period_count: 1,
//!     stations: vec![Station { id: 0, demand_values: vec![DemandValue { demand: 10, value: 5. }] }],
//!     vehicles: vec![Vehicle { id: 0, cabins: vec![Cabin { id: 0, volume: 10 }] }],
//! });
//! let environment = Arc::new(Environment::default().with_logger(Arc::new(|_| {})));
//!
//! let solver = Builder::new(instance.clone(), environment).with_workers(Some(2)).build()?;
//! let result = solver.solve()?.expect("at least one worker succeeds");
//!
//! assert!(verify(&instance, &result.solution).is_feasible());
//! assert_eq!(result.objective, 5.);
//! # Ok::<(), GenericError>(())
//! ```

mod builder;
pub use self::builder::Builder;

mod deadline;
pub use self::deadline::Deadline;

mod harness;
pub use self::harness::*;

pub mod strategies;

mod worker;
pub use self::worker::*;

use crate::utils::GenericResult;

/// A configured search ready to run.
pub struct Solver {
    harness: SearchHarness,
    workers: usize,
}

impl Solver {
    /// Returns amount of workers used by the solver.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Runs the search and returns the best successful result, if any.
    pub fn solve(&self) -> GenericResult<Option<SearchResult>> {
        self.harness.solve(self.workers)
    }
}
