//! Thruster and launch-vehicle descriptors plus the rocket-equation evaluator.

pub mod launch;
pub mod rocket;

pub use launch::LaunchOption;
pub use rocket::{Burn, DomainError, burn, burn_duration_s, mass_ratio};

use std::fmt;

/// Propellant family tag used by catalogs and exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThrusterType {
    ChemicalMono,
    ChemicalBiprop,
    ElectricXenon,
}

impl ThrusterType {
    /// Wire name of the family (`chemical_mono`, `chemical_biprop`, `electric_xenon`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ThrusterType::ChemicalMono => "chemical_mono",
            ThrusterType::ChemicalBiprop => "chemical_biprop",
            ThrusterType::ElectricXenon => "electric_xenon",
        }
    }
}

impl fmt::Display for ThrusterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Propellant family together with the parameters that only exist for that family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropellantFamily {
    /// Hydrazine monopropellant.
    ChemicalMono,
    /// Fuel/oxidizer pair burned at a fixed oxidizer-to-fuel mass ratio.
    ChemicalBiprop { mixture_ratio_ox_to_fuel: f64 },
    /// Xenon electric propulsion.
    ElectricXenon,
}

impl PropellantFamily {
    pub fn thruster_type(&self) -> ThrusterType {
        match self {
            PropellantFamily::ChemicalMono => ThrusterType::ChemicalMono,
            PropellantFamily::ChemicalBiprop { .. } => ThrusterType::ChemicalBiprop,
            PropellantFamily::ElectricXenon => ThrusterType::ElectricXenon,
        }
    }

    pub fn mixture_ratio(&self) -> Option<f64> {
        match self {
            PropellantFamily::ChemicalBiprop {
                mixture_ratio_ox_to_fuel,
            } => Some(*mixture_ratio_ox_to_fuel),
            _ => None,
        }
    }
}

/// Thruster record as resolved from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Thruster {
    pub id: String,
    pub name: String,
    pub family: PropellantFamily,
    pub isp_s: f64,
    /// Rated thrust; only needed for burn-duration estimates.
    pub thrust_n: Option<f64>,
}

impl Thruster {
    pub fn thruster_type(&self) -> ThrusterType {
        self.family.thruster_type()
    }

    /// Specific impulse scaled by an efficiency factor in `(0, 1]`.
    pub fn effective_isp_s(&self, efficiency: f64) -> f64 {
        self.isp_s * efficiency
    }
}
