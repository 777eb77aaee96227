#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use super::ProblemLimits;
use serde::{Deserialize, Serialize};

/// Specifies how much a station can take in one period and how valuable a unit of it is.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct DemandValue {
    /// Max quantity deliverable to the station in the period.
    pub demand: u32,
    /// Per-unit value rate in the period.
    pub value: f64,
}

/// Represents a gas station, a demand point served by the fleet.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// Station id, equals its index in the instance.
    pub id: usize,
    /// Demand and value for each period.
    pub demand_values: Vec<DemandValue>,
}

impl Station {
    /// Returns demand and value of the station in given period.
    pub fn demand_value(&self, period: usize) -> Option<&DemandValue> {
        self.demand_values.get(period)
    }
}

/// Represents a fixed-capacity compartment of a vehicle.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Cabin {
    /// Cabin id, equals its index on the vehicle.
    pub id: usize,
    /// Cabin capacity.
    pub volume: u32,
}

/// Represents a vehicle of the depot fleet.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Vehicle {
    /// Vehicle id, equals its index in the instance.
    pub id: usize,
    /// Vehicle compartments.
    pub cabins: Vec<Cabin>,
}

impl Vehicle {
    /// Returns total capacity of the vehicle, the sum of its cabin volumes.
    pub fn volume(&self) -> u64 {
        self.cabins.iter().map(|cabin| cabin.volume as u64).sum()
    }

    /// Returns cabin by its id.
    pub fn cabin(&self, cabin_id: usize) -> Option<&Cabin> {
        self.cabins.get(cabin_id)
    }
}

/// An immutable description of the problem: stations, vehicles and periods.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    /// Amount of periods in the planning horizon.
    #[serde(default = "default_period_count")]
    pub period_count: usize,
    /// Gas stations, indexed by their ids.
    #[serde(rename = "gasStations")]
    pub stations: Vec<Station>,
    /// Vehicles, indexed by their ids.
    pub vehicles: Vec<Vehicle>,
}

impl Instance {
    /// Returns station by its id.
    pub fn station(&self, station_id: usize) -> Option<&Station> {
        self.stations.get(station_id)
    }

    /// Returns vehicle by its id.
    pub fn vehicle(&self, vehicle_id: usize) -> Option<&Vehicle> {
        self.vehicles.get(vehicle_id)
    }

    /// Returns demand and value of the station in given period.
    pub fn demand_value(&self, station_id: usize, period: usize) -> Option<&DemandValue> {
        self.station(station_id).and_then(|station| station.demand_value(period))
    }
}

fn default_period_count() -> usize {
    ProblemLimits::PERIOD_COUNT
}
