#[cfg(test)]
#[path = "../../tests/unit/models/validation_test.rs"]
mod validation_test;

use super::{Instance, ProblemLimits};
use crate::utils::GenericError;

/// Validates an instance produced by a loader. Collects all found errors.
///
/// Structural rules are always checked. Limits of the reference problem are checked only when
/// `strict` is set.
pub fn validate_instance(instance: &Instance, strict: bool) -> Result<(), Vec<GenericError>> {
    let errors = check_structure(instance)
        .into_iter()
        .chain(if strict { check_limits(instance) } else { Vec::default() })
        .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_structure(instance: &Instance) -> Vec<GenericError> {
    let mut errors = Vec::default();

    if instance.period_count == 0 {
        errors.push("period count must be positive".into());
    }

    if instance.stations.is_empty() {
        errors.push("instance has no gas stations".into());
    }

    if instance.vehicles.is_empty() {
        errors.push("instance has no vehicles".into());
    }

    instance.stations.iter().enumerate().for_each(|(idx, station)| {
        if station.id != idx {
            errors.push(format!("gas station at index {idx} has id {}", station.id).into());
        }

        if station.demand_values.len() != instance.period_count {
            errors.push(
                format!(
                    "gas station {idx} has {} demand values, expected {}",
                    station.demand_values.len(),
                    instance.period_count
                )
                .into(),
            );
        }

        if station.demand_values.iter().any(|dv| !dv.value.is_finite() || dv.value < 0.) {
            errors.push(format!("gas station {idx} has negative or non finite value").into());
        }
    });

    instance.vehicles.iter().enumerate().for_each(|(idx, vehicle)| {
        if vehicle.id != idx {
            errors.push(format!("vehicle at index {idx} has id {}", vehicle.id).into());
        }

        if vehicle.cabins.is_empty() {
            errors.push(format!("vehicle {idx} has no cabins").into());
        }

        vehicle.cabins.iter().enumerate().for_each(|(cabin_idx, cabin)| {
            if cabin.id != cabin_idx {
                errors.push(format!("cabin at index {cabin_idx} of vehicle {idx} has id {}", cabin.id).into());
            }

            if cabin.volume == 0 {
                errors.push(format!("cabin {cabin_idx} of vehicle {idx} has zero volume").into());
            }
        });
    });

    errors
}

fn check_limits(instance: &Instance) -> Vec<GenericError> {
    let mut errors: Vec<GenericError> = Vec::default();

    if instance.stations.len() > ProblemLimits::MAX_STATIONS {
        let (size, max) = (instance.stations.len(), ProblemLimits::MAX_STATIONS);
        errors.push(format!("too many gas stations: {size}, max {max}").into());
    }

    if instance.vehicles.len() > ProblemLimits::MAX_VEHICLES {
        let (size, max) = (instance.vehicles.len(), ProblemLimits::MAX_VEHICLES);
        errors.push(format!("too many vehicles: {size}, max {max}").into());
    }

    instance.vehicles.iter().filter(|vehicle| vehicle.cabins.len() > ProblemLimits::MAX_CABINS).for_each(|vehicle| {
        errors.push(format!("vehicle {} has too many cabins: {}", vehicle.id, vehicle.cabins.len()).into())
    });

    instance
        .vehicles
        .iter()
        .flat_map(|vehicle| vehicle.cabins.iter().map(move |cabin| (vehicle.id, cabin)))
        .filter(|(_, cabin)| cabin.volume > ProblemLimits::MAX_CABIN_VOLUME)
        .for_each(|(vehicle_id, cabin)| {
            let (cabin_id, volume) = (cabin.id, cabin.volume);
            errors.push(format!("cabin {cabin_id} of vehicle {vehicle_id} exceeds max volume: {volume}").into())
        });

    instance
        .stations
        .iter()
        .filter(|station| {
            station
                .demand_values
                .iter()
                .any(|dv| dv.demand > ProblemLimits::MAX_DEMAND || dv.value > ProblemLimits::MAX_VALUE)
        })
        .for_each(|station| errors.push(format!("gas station {} exceeds demand or value limits", station.id).into()));

    errors
}
