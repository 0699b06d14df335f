use tracing::debug;

use crate::config::constant::{
    MAX_DISTRICTS, MAX_ENGINEER_CAPACITY, MAX_MANAGER_CAPACITY, MAX_SCOOTERS, MIN_DISTRICTS,
    MIN_ENGINEER_CAPACITY, MIN_MANAGER_CAPACITY, MIN_SCOOTERS,
};
use crate::domain::types::Parameters;
use crate::error::{FleetError, FleetResult};
use crate::setup::init_types::RawInput;

/// Checks presence and bounds of every field, stopping at the first violation.
///
/// Presence is checked as `scooters`, `C`, `P`; bounds as district count,
/// each district in order, manager capacity, engineer capacity.
pub fn validate(input: RawInput) -> FleetResult<Parameters> {
    let scooters = input.scooters.ok_or(FleetError::MissingField("scooters"))?;
    let manager_capacity = input
        .manager_capacity
        .ok_or(FleetError::MissingField("C"))?;
    let engineer_capacity = input
        .engineer_capacity
        .ok_or(FleetError::MissingField("P"))?;

    let nb_districts = scooters.len() as i128;
    check_in_bound(nb_districts, MIN_DISTRICTS, MAX_DISTRICTS, "Number of districts")?;

    let scooters = scooters
        .iter()
        .enumerate()
        .map(|(index, &nb_scooters)| {
            check_in_bound(nb_scooters, MIN_SCOOTERS, MAX_SCOOTERS, &format!("District {index}"))
        })
        .collect::<FleetResult<Vec<u32>>>()?;

    let manager_capacity = check_in_bound(
        manager_capacity,
        MIN_MANAGER_CAPACITY,
        MAX_MANAGER_CAPACITY,
        "Manager capacity",
    )?;
    let engineer_capacity = check_in_bound(
        engineer_capacity,
        MIN_ENGINEER_CAPACITY,
        MAX_ENGINEER_CAPACITY,
        "Engineer capacity",
    )?;

    debug!(
        "Validated {} districts, C = {}, P = {}",
        scooters.len(),
        manager_capacity,
        engineer_capacity
    );

    Ok(Parameters {
        scooters,
        manager_capacity,
        engineer_capacity,
    })
}

/// Returns `value` narrowed to `u32` when it lies in `[min, max]`.
fn check_in_bound(value: i128, min: i64, max: i64, field: &str) -> FleetResult<u32> {
    if !(min as i128..=max as i128).contains(&value) {
        return Err(FleetError::OutOfRange {
            field: field.to_string(),
            min,
            max,
            value,
        });
    }

    // Every configured bound fits in u32.
    Ok(value as u32)
}
