//! This module reimports commonly used types.

pub use crate::checker::{CheckResult, CheckerFlag, CheckerFlags, FlagEncoding, check_solution};
pub use crate::models::{
    Cabin, CabinDelivery, DemandValue, Instance, PeriodDelivery, Solution, Station, Vehicle, VehicleDelivery,
};
pub use crate::solver::strategies::{AllocationStrategy, ConstructiveAllocation, RandomAllocation};
pub use crate::solver::{Builder, Deadline, SearchResult, Solver, verify};

pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;
