use crate::models::*;

/// Creates an instance from per station `(demand, value)` lists and per vehicle cabin volumes.
pub fn create_test_instance(period_count: usize, stations: Vec<Vec<(u32, f64)>>, vehicles: Vec<Vec<u32>>) -> Instance {
    Instance {
        period_count,
        stations: stations
            .into_iter()
            .enumerate()
            .map(|(id, demand_values)| Station {
                id,
                demand_values: demand_values.into_iter().map(|(demand, value)| DemandValue { demand, value }).collect(),
            })
            .collect(),
        vehicles: vehicles
            .into_iter()
            .enumerate()
            .map(|(id, volumes)| Vehicle {
                id,
                cabins: volumes.into_iter().enumerate().map(|(id, volume)| Cabin { id, volume }).collect(),
            })
            .collect(),
    }
}

/// One period, one station with demand 10 and value 5, one vehicle with a single cabin of 10.
pub fn create_single_station_instance() -> Instance {
    create_test_instance(1, vec![vec![(10, 5.)]], vec![vec![10]])
}

/// Four periods, six stations, two vehicles with two and three cabins.
pub fn create_example_instance() -> Instance {
    create_test_instance(
        4,
        vec![
            vec![(20, 10.), (30, 12.), (10, 4.), (40, 20.)],
            vec![(15, 6.), (15, 6.), (15, 6.), (15, 6.)],
            vec![(25, 30.), (0, 0.), (50, 15.), (25, 10.)],
            vec![(60, 100.), (30, 50.), (20, 10.), (10, 5.)],
            vec![(5, 1.), (10, 2.), (15, 3.), (20, 4.)],
            vec![(12, 12.), (12, 12.), (12, 12.), (12, 12.)],
        ],
        vec![vec![10, 5], vec![15, 15, 5]],
    )
}

/// Creates a solution from per period lists of `(vehicle id, [(cabin id, station id, quantity)])`.
pub fn create_test_solution(periods: Vec<Vec<(usize, Vec<(usize, usize, u32)>)>>) -> Solution {
    Solution {
        deliveries: periods
            .into_iter()
            .map(|vehicles| PeriodDelivery {
                vehicle_deliveries: vehicles
                    .into_iter()
                    .map(|(vehicle_id, cabins)| {
                        let mut delivery = VehicleDelivery::new(vehicle_id);
                        cabins.into_iter().for_each(|(cabin_id, station_id, quantity)| {
                            delivery.deliver(cabin_id, station_id, quantity);
                        });
                        delivery
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Creates a solution which dispatches every vehicle empty in every period.
pub fn create_empty_solution(instance: &Instance) -> Solution {
    create_test_solution(
        (0..instance.period_count)
            .map(|_| instance.vehicles.iter().map(|vehicle| (vehicle.id, vec![])).collect())
            .collect(),
    )
}
