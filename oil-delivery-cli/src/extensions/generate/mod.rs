//! Generates random instances within the ranges of the reference problem.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/generate/generate_test.rs"]
mod generate_test;

use oil_delivery_core::models::*;
use oil_delivery_core::utils::Random;
use std::ops::RangeInclusive;

/// Specifies value ranges of a generated instance.
#[derive(Clone, Debug)]
pub struct InstanceRanges {
    /// Amount of gas stations.
    pub stations: RangeInclusive<usize>,
    /// Amount of vehicles.
    pub vehicles: RangeInclusive<usize>,
    /// Amount of cabins on a vehicle.
    pub cabins: RangeInclusive<usize>,
    /// Station demand in one period.
    pub demand: RangeInclusive<u32>,
    /// Per-unit station value in one period.
    pub value: RangeInclusive<u32>,
    /// Cabin volume.
    pub volume: RangeInclusive<u32>,
}

impl Default for InstanceRanges {
    fn default() -> Self {
        Self {
            stations: 10..=ProblemLimits::MAX_STATIONS,
            vehicles: 2..=ProblemLimits::MAX_VEHICLES,
            cabins: 1..=ProblemLimits::MAX_CABINS,
            demand: 1..=ProblemLimits::MAX_DEMAND,
            value: 0..=ProblemLimits::MAX_VALUE as u32,
            volume: 5..=ProblemLimits::MAX_CABIN_VOLUME,
        }
    }
}

/// Generates an instance. Station and vehicle amounts are taken from ranges unless specified.
pub fn generate_instance(
    random: &dyn Random,
    ranges: &InstanceRanges,
    stations_size: Option<usize>,
    vehicles_size: Option<usize>,
) -> Instance {
    let period_count = ProblemLimits::PERIOD_COUNT;

    let station_count = stations_size.unwrap_or_else(|| pick_usize(random, &ranges.stations));
    let vehicle_count = vehicles_size.unwrap_or_else(|| pick_usize(random, &ranges.vehicles));

    let stations = (0..station_count)
        .map(|id| Station {
            id,
            demand_values: (0..period_count)
                .map(|_| DemandValue {
                    demand: pick_u32(random, &ranges.demand),
                    value: pick_u32(random, &ranges.value) as f64,
                })
                .collect(),
        })
        .collect();

    let vehicles = (0..vehicle_count)
        .map(|id| Vehicle {
            id,
            cabins: (0..pick_usize(random, &ranges.cabins))
                .map(|id| Cabin { id, volume: pick_u32(random, &ranges.volume) })
                .collect(),
        })
        .collect();

    Instance { period_count, stations, vehicles }
}

fn pick_usize(random: &dyn Random, range: &RangeInclusive<usize>) -> usize {
    random.uniform_int(*range.start() as i32, *range.end() as i32) as usize
}

fn pick_u32(random: &dyn Random, range: &RangeInclusive<u32>) -> u32 {
    random.uniform_int(*range.start() as i32, *range.end() as i32) as u32
}
