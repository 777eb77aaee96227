//! Scores deliveries of one vehicle in one period.
//!
//! The objective rewards vehicles which deliver valuable cargo relative to station demand caps,
//! run close to full capacity and serve stations with close ids.

#[cfg(test)]
#[path = "../../tests/unit/checker/score_test.rs"]
mod score_test;

use crate::models::{DemandValue, Instance, Vehicle, VehicleDelivery};

/// Score components of a single vehicle dispatch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VehicleScore {
    /// Sum of `quantity * value / demand` over cabin deliveries.
    pub value: f64,
    /// Total delivered quantity.
    pub load: u64,
    /// Load divided by vehicle volume.
    pub full_load_rate: f64,
    /// Cabin count divided by cabin count plus station id spread.
    pub load_sharing: f64,
    /// Min station id served, zero when nothing is delivered.
    pub min_station_id: usize,
    /// Max station id served, zero when nothing is delivered.
    pub max_station_id: usize,
    /// Amount of deliveries to stations with zero demand, their value term is skipped.
    pub zero_demand_deliveries: usize,
}

impl VehicleScore {
    /// Returns contribution of the dispatch to the objective.
    pub fn contribution(&self) -> f64 {
        self.value * self.full_load_rate * self.load_sharing
    }
}

/// Accumulates score components cabin by cabin.
#[derive(Default)]
pub(crate) struct ScoreAccumulator {
    value: f64,
    load: u64,
    station_range: Option<(usize, usize)>,
    zero_demand_deliveries: usize,
}

impl ScoreAccumulator {
    pub fn add(&mut self, station_id: usize, quantity: u32, demand_value: &DemandValue) {
        if demand_value.demand == 0 {
            self.zero_demand_deliveries += 1;
        } else {
            self.value += quantity as f64 * demand_value.value / demand_value.demand as f64;
        }

        self.load += quantity as u64;
        self.station_range = Some(
            self.station_range
                .map_or((station_id, station_id), |(min, max)| (min.min(station_id), max.max(station_id))),
        );
    }

    pub fn finish(self, vehicle: &Vehicle) -> VehicleScore {
        let (min_station_id, max_station_id) = self.station_range.unwrap_or((0, 0));

        let volume = vehicle.volume();
        let full_load_rate = if volume == 0 { 0. } else { self.load as f64 / volume as f64 };

        let cabin_count = vehicle.cabins.len();
        let spread = cabin_count + max_station_id - min_station_id;
        let load_sharing = if spread == 0 { 0. } else { cabin_count as f64 / spread as f64 };

        VehicleScore {
            value: self.value,
            load: self.load,
            full_load_rate,
            load_sharing,
            min_station_id,
            max_station_id,
            zero_demand_deliveries: self.zero_demand_deliveries,
        }
    }
}

/// Scores deliveries of a vehicle in given period. Deliveries to unknown stations are ignored.
/// Returns `None` when the vehicle is not part of the instance.
pub fn score_vehicle_delivery(instance: &Instance, period: usize, delivery: &VehicleDelivery) -> Option<VehicleScore> {
    let vehicle = instance.vehicle(delivery.id)?;

    let accumulator = delivery.cabin_deliveries.iter().fold(ScoreAccumulator::default(), |mut acc, cabin| {
        if let Some(demand_value) = instance.demand_value(cabin.station_id, period) {
            acc.add(cabin.station_id, cabin.quantity, demand_value);
        }
        acc
    });

    Some(accumulator.finish(vehicle))
}

/// Returns objective contribution of all vehicle dispatches in given period.
pub fn score_period(instance: &Instance, period: usize, deliveries: &[VehicleDelivery]) -> f64 {
    deliveries
        .iter()
        .filter_map(|delivery| score_vehicle_delivery(instance, period, delivery))
        .map(|score| score.contribution())
        .sum()
}
