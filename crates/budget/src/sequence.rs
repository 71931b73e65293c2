//! Sequential mass depletion across an ordered maneuver list.

use sat_propulsion::{DomainError, burn};

use crate::maneuver::ManeuverInput;

/// Rocket-equation outcome for one maneuver line item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManeuverStep {
    pub total_delta_v_mps: f64,
    pub isp_effective_s: f64,
    pub m_before_kg: f64,
    pub m_after_kg: f64,
    pub propellant_kg: f64,
}

/// Result of flying the whole sequence from a candidate initial mass.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceOutcome {
    pub initial_mass_kg: f64,
    pub steps: Vec<ManeuverStep>,
    pub final_mass_kg: f64,
    pub total_propellant_kg: f64,
}

/// Fly `maneuvers` in order starting from `initial_mass_kg`.
///
/// The mass after each maneuver is carried forward unchanged as the next
/// maneuver's starting mass.
pub fn evaluate_sequence(
    initial_mass_kg: f64,
    maneuvers: &[ManeuverInput],
) -> Result<SequenceOutcome, DomainError> {
    let mut steps = Vec::with_capacity(maneuvers.len());
    let mut mass = initial_mass_kg;
    let mut total_propellant_kg = 0.0;

    for maneuver in maneuvers {
        let total_delta_v_mps = maneuver.total_delta_v_mps();
        let isp_effective_s = maneuver.effective_isp_s();
        let result = burn(mass, total_delta_v_mps, isp_effective_s)?;

        total_propellant_kg += result.propellant_kg;
        steps.push(ManeuverStep {
            total_delta_v_mps,
            isp_effective_s,
            m_before_kg: result.mass_before_kg,
            m_after_kg: result.mass_after_kg,
            propellant_kg: result.propellant_kg,
        });
        mass = result.mass_after_kg;
    }

    Ok(SequenceOutcome {
        initial_mass_kg,
        steps,
        final_mass_kg: mass,
        total_propellant_kg,
    })
}
