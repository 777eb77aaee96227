use crate::helpers::utils::ManualQuota;
use crate::models::{Instance, PeriodDelivery, Solution, VehicleDelivery};
use crate::solver::strategies::{AllocationContext, AllocationStrategy};
use crate::utils::GenericResult;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Sends every cabin of every vehicle to the station with the same index as the period, with a
/// quantity which depends on the worker index. Useful to get predictable objectives per worker.
pub struct WorkerDependentStrategy {
    pub quantities: Vec<u32>,
}

impl AllocationStrategy for WorkerDependentStrategy {
    fn name(&self) -> &str {
        "worker-dependent"
    }

    fn allocate(&self, ctx: &AllocationContext, period: usize, _: &Solution) -> GenericResult<PeriodDelivery> {
        let quantity = self.quantities[ctx.worker_idx % self.quantities.len()];

        Ok(create_uniform_delivery(ctx.instance, period, quantity))
    }
}

/// Fails for workers listed in `failing`, delegates to `WorkerDependentStrategy` otherwise.
pub struct FailingStrategy {
    pub failing: Vec<usize>,
    pub inner: WorkerDependentStrategy,
}

impl AllocationStrategy for FailingStrategy {
    fn name(&self) -> &str {
        "failing"
    }

    fn allocate(&self, ctx: &AllocationContext, period: usize, solution: &Solution) -> GenericResult<PeriodDelivery> {
        if self.failing.contains(&ctx.worker_idx) {
            return Err(format!("worker {} cannot allocate", ctx.worker_idx).into());
        }

        self.inner.allocate(ctx, period, solution)
    }
}

/// Counts calls and returns empty dispatches.
#[derive(Default)]
pub struct CountingStrategy {
    pub calls: Arc<AtomicUsize>,
}

impl AllocationStrategy for CountingStrategy {
    fn name(&self) -> &str {
        "counting"
    }

    fn allocate(&self, ctx: &AllocationContext, _: usize, _: &Solution) -> GenericResult<PeriodDelivery> {
        self.calls.fetch_add(1, Ordering::Relaxed);

        Ok(PeriodDelivery {
            vehicle_deliveries: ctx.instance.vehicles.iter().map(|vehicle| VehicleDelivery::new(vehicle.id)).collect(),
        })
    }
}

/// Uses the quantity at the call index (the last one when calls exceed the list) and fires the
/// quota right after the call with index `interrupt_at` is served.
pub struct InterruptingStrategy {
    pub quota: Arc<ManualQuota>,
    pub quantities: Vec<u32>,
    pub interrupt_at: usize,
    pub calls: AtomicUsize,
}

impl InterruptingStrategy {
    pub fn new(quota: Arc<ManualQuota>, quantities: Vec<u32>, interrupt_at: usize) -> Self {
        Self { quota, quantities, interrupt_at, calls: AtomicUsize::new(0) }
    }
}

impl AllocationStrategy for InterruptingStrategy {
    fn name(&self) -> &str {
        "interrupting"
    }

    fn allocate(&self, ctx: &AllocationContext, period: usize, _: &Solution) -> GenericResult<PeriodDelivery> {
        let call = self.calls.fetch_add(1, Ordering::Relaxed);
        let quantity = self.quantities[call.min(self.quantities.len() - 1)];

        if call == self.interrupt_at {
            self.quota.set(true);
        }

        Ok(create_uniform_delivery(ctx.instance, period, quantity))
    }
}

pub fn create_uniform_delivery(instance: &Instance, period: usize, quantity: u32) -> PeriodDelivery {
    PeriodDelivery {
        vehicle_deliveries: instance
            .vehicles
            .iter()
            .map(|vehicle| {
                let mut delivery = VehicleDelivery::new(vehicle.id);
                vehicle.cabins.iter().for_each(|cabin| {
                    delivery.deliver(cabin.id, period % instance.stations.len(), quantity.min(cabin.volume));
                });
                delivery
            })
            .collect(),
    }
}
