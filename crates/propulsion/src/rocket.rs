//! Tsiolkovsky rocket equation for a single impulsive burn.

use sat_core::units::exhaust_velocity_m_s;
use thiserror::Error;

/// Masses either side of a burn. `propellant_kg` is always `mass_before_kg - mass_after_kg`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Burn {
    pub mass_before_kg: f64,
    pub mass_after_kg: f64,
    pub propellant_kg: f64,
}

/// Physical invariant violated while evaluating a burn.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("mass before burn must be positive (got {0} kg)")]
    NonPositiveMass(f64),
    #[error("effective specific impulse must be positive (got {0} s)")]
    NonPositiveIsp(f64),
    #[error("delta-v must be non-negative (got {0} m/s)")]
    NegativeDeltaV(f64),
}

/// Mass ratio `m_before / m_after` for a burn of `delta_v_mps` at `isp_s`.
pub fn mass_ratio(delta_v_mps: f64, isp_s: f64) -> Result<f64, DomainError> {
    if !(isp_s > 0.0) {
        return Err(DomainError::NonPositiveIsp(isp_s));
    }
    if !(delta_v_mps >= 0.0) {
        return Err(DomainError::NegativeDeltaV(delta_v_mps));
    }
    if delta_v_mps == 0.0 {
        return Ok(1.0);
    }
    Ok((delta_v_mps / exhaust_velocity_m_s(isp_s)).exp())
}

/// Evaluate one burn: `m_after = m_before * exp(-dv / (g0 * isp))`.
pub fn burn(
    mass_before_kg: f64,
    delta_v_total_mps: f64,
    isp_effective_s: f64,
) -> Result<Burn, DomainError> {
    if !(mass_before_kg > 0.0) {
        return Err(DomainError::NonPositiveMass(mass_before_kg));
    }
    if !(isp_effective_s > 0.0) {
        return Err(DomainError::NonPositiveIsp(isp_effective_s));
    }
    if !(delta_v_total_mps >= 0.0) {
        return Err(DomainError::NegativeDeltaV(delta_v_total_mps));
    }

    let mass_after_kg = if delta_v_total_mps == 0.0 {
        mass_before_kg
    } else {
        mass_before_kg * (-delta_v_total_mps / exhaust_velocity_m_s(isp_effective_s)).exp()
    };

    Ok(Burn {
        mass_before_kg,
        mass_after_kg,
        propellant_kg: mass_before_kg - mass_after_kg,
    })
}

/// Burn time at constant mass flow `F / (g0 * Isp)` for the given propellant load.
pub fn burn_duration_s(propellant_kg: f64, isp_effective_s: f64, thrust_n: f64) -> f64 {
    propellant_kg * exhaust_velocity_m_s(isp_effective_s) / thrust_n
}
