//! A collection of models which describe the oil delivery problem and its solution.

mod problem;
pub use self::problem::*;

mod solution;
pub use self::solution::*;

mod validation;
pub use self::validation::*;

/// Limits of the reference problem definition.
pub struct ProblemLimits;

impl ProblemLimits {
    /// Max amount of gas stations.
    pub const MAX_STATIONS: usize = 110;
    /// Max amount of vehicles.
    pub const MAX_VEHICLES: usize = 10;
    /// Max amount of cabins on a vehicle.
    pub const MAX_CABINS: usize = 5;
    /// Default amount of periods.
    pub const PERIOD_COUNT: usize = 4;
    /// Max station demand in one period.
    pub const MAX_DEMAND: u32 = 60;
    /// Max per-unit station value in one period.
    pub const MAX_VALUE: f64 = 100.;
    /// Max volume of a single cabin.
    pub const MAX_CABIN_VOLUME: u32 = 15;
}
