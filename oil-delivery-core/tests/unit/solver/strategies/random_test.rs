use super::*;
use crate::helpers::models::*;
use crate::utils::DefaultRandom;

#[test]
fn can_dispatch_every_vehicle_and_cabin() {
    let instance = create_example_instance();
    let random = DefaultRandom::new_repeatable(0);
    let ctx = AllocationContext { instance: &instance, random: &random, worker_idx: 0 };

    let delivery = RandomAllocation.allocate(&ctx, 1, &Solution::default()).expect("cannot allocate");

    assert_eq!(delivery.vehicle_deliveries.len(), 2);
    delivery.vehicle_deliveries.iter().zip(instance.vehicles.iter()).for_each(|(delivery, vehicle)| {
        assert_eq!(delivery.id, vehicle.id);
        assert_eq!(delivery.cabin_deliveries.len(), vehicle.cabins.len());

        delivery.cabin_deliveries.iter().zip(vehicle.cabins.iter()).for_each(|(cabin_delivery, cabin)| {
            let demand = instance.demand_value(cabin_delivery.station_id, 1).expect("unknown station").demand;
            assert_eq!(cabin_delivery.id, cabin.id);
            assert!(cabin_delivery.quantity < cabin.volume.max(1));
            assert!(cabin_delivery.quantity <= demand);
        });
    });
}

#[test]
fn can_fail_on_missing_demand() {
    let mut instance = create_single_station_instance();
    instance.stations[0].demand_values.clear();
    let random = DefaultRandom::new_repeatable(0);
    let ctx = AllocationContext { instance: &instance, random: &random, worker_idx: 0 };

    assert!(RandomAllocation.allocate(&ctx, 0, &Solution::default()).is_err());
}
