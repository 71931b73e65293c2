//! Launch-mass and tank-capacity checks.

use sat_propulsion::LaunchOption;

use crate::tanks::{Tank, TankMasses};

/// Outcome of comparing a solved budget against vehicle and tank limits.
#[derive(Debug, Clone, PartialEq)]
pub struct Feasibility {
    pub feasible: bool,
    /// Delivered mass minus initial mass; negative when the launch option is too small.
    pub mass_margin_kg: f64,
    /// Tanks whose load strictly exceeds capacity, in hydrazine/oxidizer/xenon order.
    pub tank_constraints_violated: Vec<Tank>,
}

pub fn check_feasibility(
    initial_mass_kg: f64,
    launch_option: &LaunchOption,
    totals: &TankMasses,
    capacities: &TankMasses,
) -> Feasibility {
    let mass_margin_kg = launch_option.mass_margin_kg(initial_mass_kg);
    let tank_constraints_violated: Vec<Tank> = Tank::ALL
        .into_iter()
        .filter(|tank| totals.get(*tank) > capacities.get(*tank))
        .collect();

    Feasibility {
        feasible: mass_margin_kg >= 0.0 && tank_constraints_violated.is_empty(),
        mass_margin_kg,
        tank_constraints_violated,
    }
}
