#[cfg(test)]
#[path = "../../../tests/unit/solver/strategies/random_test.rs"]
mod random_test;

use super::{AllocationContext, AllocationStrategy};
use crate::models::{PeriodDelivery, Solution, VehicleDelivery};
use crate::utils::GenericResult;

/// Dispatches every vehicle and sends every cabin to a uniformly random station with a random
/// quantity below both the cabin volume and the station demand.
///
/// It ignores constraints spanning several vehicles or periods, so most of its solutions are
/// infeasible. It is mostly useful as a baseline and to exercise the checker.
#[derive(Default)]
pub struct RandomAllocation;

impl AllocationStrategy for RandomAllocation {
    fn name(&self) -> &str {
        "random"
    }

    fn allocate(&self, ctx: &AllocationContext, period: usize, _: &Solution) -> GenericResult<PeriodDelivery> {
        let station_count = ctx.instance.stations.len();

        let vehicle_deliveries = ctx
            .instance
            .vehicles
            .iter()
            .map(|vehicle| {
                let init = VehicleDelivery::new(vehicle.id);
                vehicle.cabins.iter().try_fold(init, |mut delivery, cabin| -> GenericResult<VehicleDelivery> {
                    let station_id = ctx.random.pick(station_count);
                    let demand = ctx
                        .instance
                        .demand_value(station_id, period)
                        .map(|dv| dv.demand)
                        .ok_or_else(|| format!("no demand for station {station_id} in period {period}"))?;

                    let quantity = ctx.random.pick(cabin.volume.min(demand) as usize) as u32;
                    delivery.deliver(cabin.id, station_id, quantity);

                    Ok(delivery)
                })
            })
            .collect::<GenericResult<Vec<_>>>()?;

        Ok(PeriodDelivery { vehicle_deliveries })
    }
}
