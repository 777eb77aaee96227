#[cfg(test)]
#[path = "../../tests/unit/models/solution_test.rs"]
mod solution_test;

use super::Instance;
use serde::{Deserialize, Serialize};

/// A quantity loaded into one cabin and delivered to one station.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CabinDelivery {
    /// Cabin id on the vehicle.
    pub id: usize,
    /// Destination station id.
    pub station_id: usize,
    /// Delivered quantity.
    pub quantity: u32,
}

/// Deliveries made by one vehicle in one period.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDelivery {
    /// Vehicle id.
    pub id: usize,
    /// Cabin deliveries of the vehicle.
    #[serde(default)]
    pub cabin_deliveries: Vec<CabinDelivery>,
}

impl VehicleDelivery {
    /// Creates an empty dispatch of given vehicle.
    pub fn new(vehicle_id: usize) -> Self {
        Self { id: vehicle_id, cabin_deliveries: Vec::default() }
    }

    /// Adds a cabin delivery.
    pub fn deliver(&mut self, cabin_id: usize, station_id: usize, quantity: u32) -> &mut Self {
        self.cabin_deliveries.push(CabinDelivery { id: cabin_id, station_id, quantity });
        self
    }
}

/// Deliveries made by the fleet in one period.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PeriodDelivery {
    /// Vehicle dispatches of the period.
    #[serde(default)]
    pub vehicle_deliveries: Vec<VehicleDelivery>,
}

/// A candidate solution: deliveries for each period of the planning horizon.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Solution {
    /// Deliveries in period order.
    #[serde(default)]
    pub deliveries: Vec<PeriodDelivery>,
}

impl Solution {
    /// Creates an empty solution with room for given amount of periods.
    pub fn with_capacity(period_count: usize) -> Self {
        Self { deliveries: Vec::with_capacity(period_count) }
    }

    /// Returns amount of filled periods.
    pub fn period_count(&self) -> usize {
        self.deliveries.len()
    }

    /// Returns true if every period of the instance is filled.
    pub fn is_complete(&self, instance: &Instance) -> bool {
        self.deliveries.len() == instance.period_count
    }

    /// Iterates over all cabin deliveries together with their period index.
    pub fn cabin_deliveries(&self) -> impl Iterator<Item = (usize, &CabinDelivery)> + '_ {
        self.deliveries.iter().enumerate().flat_map(|(period, delivery)| {
            delivery
                .vehicle_deliveries
                .iter()
                .flat_map(move |vehicle| vehicle.cabin_deliveries.iter().map(move |cabin| (period, cabin)))
        })
    }
}
