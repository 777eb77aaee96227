#[cfg(test)]
#[path = "../../../tests/unit/solver/strategies/constructive_test.rs"]
mod constructive_test;

use super::{AllocationContext, AllocationStrategy};
use crate::models::{Instance, PeriodDelivery, Solution, Vehicle, VehicleDelivery};
use crate::utils::GenericResult;
use rustc_hash::FxHashSet;

/// A randomized construction which keeps the solution feasible.
///
/// Vehicles are processed in random order. Each vehicle picks a random anchor among stations
/// which still accept oil and fills its cabins from stations inside a window of `cluster_width`
/// ids starting at the anchor, preferring the best value per unit of demand. Stations served in
/// earlier periods are never used again and the accumulated quantity never exceeds the demand of
/// the current period. Cabins stay empty when nothing fits.
pub struct ConstructiveAllocation {
    cluster_width: usize,
}

impl ConstructiveAllocation {
    /// Creates a new instance of `ConstructiveAllocation`.
    pub fn new(cluster_width: usize) -> Self {
        Self { cluster_width }
    }
}

impl Default for ConstructiveAllocation {
    fn default() -> Self {
        Self::new(4)
    }
}

impl AllocationStrategy for ConstructiveAllocation {
    fn name(&self) -> &str {
        "constructive"
    }

    fn allocate(&self, ctx: &AllocationContext, period: usize, solution: &Solution) -> GenericResult<PeriodDelivery> {
        let instance = ctx.instance;
        let mut remaining = get_remaining_demand(instance, period, solution)?;

        let mut order = (0..instance.vehicles.len()).collect::<Vec<_>>();
        ctx.random.shuffle(order.as_mut_slice());

        let mut vehicle_deliveries =
            instance.vehicles.iter().map(|vehicle| VehicleDelivery::new(vehicle.id)).collect::<Vec<_>>();

        for vehicle_idx in order {
            let open =
                remaining.iter().enumerate().filter(|(_, left)| **left > 0).map(|(idx, _)| idx).collect::<Vec<_>>();
            if open.is_empty() {
                break;
            }

            let anchor = open[ctx.random.pick(open.len())];
            let window_end = anchor.saturating_add(self.cluster_width).min(remaining.len() - 1);

            fill_vehicle(
                instance,
                period,
                &instance.vehicles[vehicle_idx],
                (anchor, window_end),
                &mut remaining,
                &mut vehicle_deliveries[vehicle_idx],
            );
        }

        Ok(PeriodDelivery { vehicle_deliveries })
    }
}

/// Returns how much each station can still take in given period. Stations served in previous
/// periods are closed.
fn get_remaining_demand(instance: &Instance, period: usize, solution: &Solution) -> GenericResult<Vec<u32>> {
    let served = solution
        .cabin_deliveries()
        .filter(|(served_period, _)| *served_period < period)
        .map(|(_, delivery)| delivery.station_id)
        .collect::<FxHashSet<_>>();

    instance
        .stations
        .iter()
        .map(|station| -> GenericResult<u32> {
            let demand_value = station
                .demand_value(period)
                .ok_or_else(|| format!("no demand for station {} in period {period}", station.id))?;

            Ok(if served.contains(&station.id) { 0 } else { demand_value.demand })
        })
        .collect()
}

fn fill_vehicle(
    instance: &Instance,
    period: usize,
    vehicle: &Vehicle,
    window: (usize, usize),
    remaining: &mut [u32],
    delivery: &mut VehicleDelivery,
) {
    let rate = |station_id: usize| {
        instance
            .demand_value(station_id, period)
            .filter(|dv| dv.demand > 0)
            .map_or(0., |dv| dv.value / dv.demand as f64)
    };

    for cabin in vehicle.cabins.iter() {
        let best = (window.0..=window.1)
            .filter(|station_id| remaining[*station_id] > 0)
            .max_by(|&a, &b| rate(a).total_cmp(&rate(b)).then_with(|| b.cmp(&a)));

        let Some(station_id) = best else {
            break;
        };

        let quantity = cabin.volume.min(remaining[station_id]);
        if quantity == 0 {
            continue;
        }

        remaining[station_id] -= quantity;

        delivery.deliver(cabin.id, station_id, quantity);
    }
}
