//! Input checks run before any computation.

use sat_catalog::CatalogError;
use thiserror::Error;

use crate::compute::ComputeInput;
use crate::maneuver::ManeuverInput;
use crate::tanks::Tank;

pub const MAX_DRY_MASS_KG: f64 = 50_000.0;
pub const MAX_OCCURRENCES: u32 = 10_000;
const MAX_NAME_LEN: usize = 100;

/// Malformed request. Nothing has been computed when one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Dry mass must be positive (got {0} kg)")]
    NonPositiveDryMass(f64),
    #[error("Dry mass must not exceed 50000 kg (got {0} kg)")]
    DryMassTooLarge(f64),
    #[error("At least one maneuver is required")]
    NoManeuvers,
    #[error("maneuver #{index} '{name}': {reason}")]
    Maneuver {
        index: usize,
        name: String,
        reason: String,
    },
    #[error("{tank} tank capacity must be non-negative (got {value} kg)")]
    TankCapacity { tank: Tank, value: f64 },
    #[error("invalid solver settings: {0}")]
    SolverSettings(&'static str),
    #[error(transparent)]
    Unresolved(#[from] CatalogError),
}

/// Check every field of a resolved request.
pub fn validate_input(input: &ComputeInput) -> Result<(), ValidationError> {
    let dry = input.dry_mass_kg;
    if !(dry > 0.0) {
        return Err(ValidationError::NonPositiveDryMass(dry));
    }
    if dry > MAX_DRY_MASS_KG {
        return Err(ValidationError::DryMassTooLarge(dry));
    }
    if input.maneuvers.is_empty() {
        return Err(ValidationError::NoManeuvers);
    }
    for (index, maneuver) in input.maneuvers.iter().enumerate() {
        if let Some(reason) = maneuver_problem(maneuver) {
            return Err(ValidationError::Maneuver {
                index: index + 1,
                name: maneuver.name.clone(),
                reason,
            });
        }
    }
    for tank in Tank::ALL {
        let value = input.tanks.get(tank);
        if !(value >= 0.0) {
            return Err(ValidationError::TankCapacity { tank, value });
        }
    }
    Ok(())
}

fn maneuver_problem(maneuver: &ManeuverInput) -> Option<String> {
    let name_len = maneuver.name.chars().count();
    if name_len == 0 || name_len > MAX_NAME_LEN {
        return Some(format!("name must be 1-{MAX_NAME_LEN} characters"));
    }
    if !(maneuver.delta_v_mps > 0.0 && maneuver.delta_v_mps.is_finite()) {
        return Some(format!(
            "delta-v must be positive (got {} m/s)",
            maneuver.delta_v_mps
        ));
    }
    if maneuver.occurrences < 1 || maneuver.occurrences > MAX_OCCURRENCES {
        return Some(format!(
            "occurrences must be between 1 and {MAX_OCCURRENCES} (got {})",
            maneuver.occurrences
        ));
    }
    let efficiency = maneuver.thruster_efficiency;
    if !(efficiency > 0.0 && efficiency <= 1.0) {
        return Some(format!(
            "thruster efficiency must be in (0, 1] (got {efficiency})"
        ));
    }
    let isp = maneuver.thruster.isp_s;
    if !(isp > 0.0 && isp.is_finite()) {
        return Some(format!(
            "thruster '{}' specific impulse must be positive (got {isp} s)",
            maneuver.thruster.id
        ));
    }
    if let Some(thrust) = maneuver.thruster.thrust_n {
        if !(thrust > 0.0 && thrust.is_finite()) {
            return Some(format!(
                "thruster '{}' rated thrust must be positive (got {thrust} N)",
                maneuver.thruster.id
            ));
        }
    }
    None
}
