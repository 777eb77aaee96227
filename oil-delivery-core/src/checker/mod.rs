//! This module provides functionality to check that given solution is feasible, which means that
//! there is no constraint violations, and to compute its objective.
//!
//! The checker never stops on the first violation: it records a flag and keeps scanning, so a
//! single pass reports the full set of violations. The only exception is the station period
//! check which stops on the first station served in more than one period.

#[cfg(test)]
#[path = "../../tests/unit/checker/checker_test.rs"]
mod checker_test;

mod exit_code;
pub use self::exit_code::*;

mod flags;
pub use self::flags::*;

mod score;
pub use self::score::*;

use crate::models::{Instance, PeriodDelivery, Solution};
use rustc_hash::FxHashSet;

/// A result of the solution check.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckResult {
    /// Detected violations.
    pub flags: CheckerFlags,
    /// Objective value, meaningful only when no violations are detected.
    pub objective: f64,
    /// Amount of deliveries to stations with zero demand, their value terms were skipped.
    pub zero_demand_deliveries: usize,
}

impl CheckResult {
    /// Returns true if the solution has no violations.
    pub fn is_feasible(&self) -> bool {
        self.flags.is_empty()
    }

    /// Returns the objective if the solution is feasible.
    pub fn feasible_objective(&self) -> Option<f64> {
        self.is_feasible().then_some(self.objective)
    }
}

/// Stores an instance and a solution together and performs the check.
pub struct CheckerContext<'a> {
    instance: &'a Instance,
    solution: &'a Solution,
}

/// Keeps state accumulated while scanning periods.
struct ScanState {
    flags: CheckerFlags,
    objective: f64,
    zero_demand_deliveries: usize,
    /// Quantity delivered to each station so far, accumulated over all periods.
    oil_sum: Vec<u64>,
    /// Flattened `period * station_count + station` grid of served stations.
    delivered: Vec<bool>,
}

impl<'a> CheckerContext<'a> {
    /// Creates an instance of `CheckerContext`.
    pub fn new(instance: &'a Instance, solution: &'a Solution) -> Self {
        Self { instance, solution }
    }

    /// Performs solution check.
    pub fn check(&self) -> CheckResult {
        let station_count = self.instance.stations.len();
        let period_count = self.instance.period_count;

        let mut state = ScanState {
            flags: CheckerFlags::default(),
            objective: 0.,
            zero_demand_deliveries: 0,
            oil_sum: vec![0; station_count],
            delivered: vec![false; station_count * period_count],
        };

        if self.solution.deliveries.len() != period_count {
            state.flags.insert(CheckerFlag::Format);
        }

        // periods beyond the horizon have no demand data, they are covered by the format error
        self.solution
            .deliveries
            .iter()
            .take(period_count)
            .enumerate()
            .for_each(|(period, delivery)| self.check_period(&mut state, period, delivery));

        if self.has_station_served_twice(&state.delivered) {
            state.flags.insert(CheckerFlag::StationOverTime);
        }

        CheckResult {
            flags: state.flags,
            objective: state.objective,
            zero_demand_deliveries: state.zero_demand_deliveries,
        }
    }

    fn check_period(&self, state: &mut ScanState, period: usize, delivery: &PeriodDelivery) {
        let station_count = self.instance.stations.len();

        if delivery.vehicle_deliveries.len() != self.instance.vehicles.len() {
            state.flags.insert(CheckerFlag::VehicleDispatch);
        }

        let mut dispatched = FxHashSet::default();

        for vehicle_delivery in delivery.vehicle_deliveries.iter() {
            if !dispatched.insert(vehicle_delivery.id) {
                state.flags.insert(CheckerFlag::VehicleDispatch);
            }

            let Some(vehicle) = self.instance.vehicle(vehicle_delivery.id) else {
                state.flags.insert(CheckerFlag::VehicleDispatch);
                continue;
            };

            let mut score = ScoreAccumulator::default();

            for cabin_delivery in vehicle_delivery.cabin_deliveries.iter() {
                let capacity = vehicle.cabin(cabin_delivery.id).map_or(0, |cabin| cabin.volume);
                if cabin_delivery.quantity > capacity {
                    state.flags.insert(CheckerFlag::CabinOverVolume);
                }

                let station_id = cabin_delivery.station_id;
                let Some(demand_value) = self.instance.demand_value(station_id, period) else {
                    state.flags.insert(CheckerFlag::Format);
                    continue;
                };

                let oil_sum = &mut state.oil_sum[station_id];
                *oil_sum += cabin_delivery.quantity as u64;
                // NOTE running total over all periods is compared against the current period cap
                if *oil_sum > demand_value.demand as u64 {
                    state.flags.insert(CheckerFlag::StationOverDemand);
                }

                state.delivered[period * station_count + station_id] = true;

                score.add(station_id, cabin_delivery.quantity, demand_value);
            }

            let score = score.finish(vehicle);
            state.objective += score.contribution();
            state.zero_demand_deliveries += score.zero_demand_deliveries;
        }
    }

    fn has_station_served_twice(&self, delivered: &[bool]) -> bool {
        let station_count = self.instance.stations.len();
        let period_count = self.instance.period_count;

        (0..station_count)
            .any(|station| (0..period_count).filter(|period| delivered[period * station_count + station]).count() > 1)
    }
}

/// Checks given solution against the instance.
pub fn check_solution(instance: &Instance, solution: &Solution) -> CheckResult {
    CheckerContext::new(instance, solution).check()
}
