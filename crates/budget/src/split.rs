//! Propellant-type split by thruster family.

use sat_propulsion::PropellantFamily;
use thiserror::Error;

/// Tank-specific breakdown of one maneuver's propellant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropellantSplit {
    /// Monopropellant: the whole load is hydrazine.
    Hydrazine { hydrazine_kg: f64 },
    /// Bipropellant: fuel draws on the hydrazine tank, oxidizer on the oxidizer tank.
    Bipropellant { fuel_kg: f64, ox_kg: f64 },
    Xenon { xenon_kg: f64 },
}

impl PropellantSplit {
    pub fn ox_kg(&self) -> Option<f64> {
        match self {
            PropellantSplit::Bipropellant { ox_kg, .. } => Some(*ox_kg),
            _ => None,
        }
    }

    pub fn fuel_kg(&self) -> Option<f64> {
        match self {
            PropellantSplit::Bipropellant { fuel_kg, .. } => Some(*fuel_kg),
            _ => None,
        }
    }

    pub fn xenon_kg(&self) -> Option<f64> {
        match self {
            PropellantSplit::Xenon { xenon_kg } => Some(*xenon_kg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplitError {
    #[error("bipropellant mixture ratio must be positive and finite (got {0})")]
    InvalidMixtureRatio(f64),
}

/// Check that a family carries everything its split needs.
pub fn check_family(family: &PropellantFamily) -> Result<(), SplitError> {
    match *family {
        PropellantFamily::ChemicalBiprop {
            mixture_ratio_ox_to_fuel,
        } if !(mixture_ratio_ox_to_fuel > 0.0 && mixture_ratio_ox_to_fuel.is_finite()) => {
            Err(SplitError::InvalidMixtureRatio(mixture_ratio_ox_to_fuel))
        }
        _ => Ok(()),
    }
}

/// Split `propellant_kg` according to the thruster family.
///
/// For a bipropellant with `MR = ox / fuel`: `fuel = prop / (1 + MR)` and
/// `ox = prop - fuel`, so the two parts always sum back to `prop`.
pub fn split_propellant(
    propellant_kg: f64,
    family: &PropellantFamily,
) -> Result<PropellantSplit, SplitError> {
    match *family {
        PropellantFamily::ChemicalMono => Ok(PropellantSplit::Hydrazine {
            hydrazine_kg: propellant_kg,
        }),
        PropellantFamily::ChemicalBiprop {
            mixture_ratio_ox_to_fuel,
        } => {
            check_family(family)?;
            let fuel_kg = propellant_kg / (1.0 + mixture_ratio_ox_to_fuel);
            Ok(PropellantSplit::Bipropellant {
                fuel_kg,
                ox_kg: propellant_kg - fuel_kg,
            })
        }
        PropellantFamily::ElectricXenon => Ok(PropellantSplit::Xenon {
            xenon_kg: propellant_kg,
        }),
    }
}
