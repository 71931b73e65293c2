//! End-to-end budget computation over resolved inputs.

use sat_propulsion::{LaunchOption, Thruster, burn_duration_s};
use tracing::{info, warn};

use crate::error::BudgetError;
use crate::feasibility::check_feasibility;
use crate::maneuver::{ManeuverInput, ManeuverType};
use crate::solver::{SolverSettings, solve_initial_mass};
use crate::split::{PropellantSplit, check_family, split_propellant};
use crate::tanks::{Tank, TankMasses};
use crate::validate::{ValidationError, validate_input};

/// Fully resolved request: no catalog ids left, only value objects.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputeInput {
    pub dry_mass_kg: f64,
    pub launch_option: LaunchOption,
    /// Mission execution order.
    pub maneuvers: Vec<ManeuverInput>,
    pub tanks: TankMasses,
}

/// Per-maneuver breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ManeuverResult {
    pub name: String,
    pub maneuver_type: ManeuverType,
    pub delta_v_mps: f64,
    pub occurrences: u32,
    pub total_delta_v_mps: f64,
    pub thruster: Thruster,
    pub thruster_efficiency: f64,
    pub propellant_kg: f64,
    pub split: PropellantSplit,
    pub m_before_kg: f64,
    pub m_after_kg: f64,
    /// Present only when the thruster has a rated thrust.
    pub burn_duration_s: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputeResponse {
    pub initial_mass_kg: f64,
    pub dry_mass_kg: f64,
    pub total_propellant_kg: f64,
    pub total_delta_v_mps: f64,
    pub feasible: bool,
    pub mass_margin_kg: f64,
    pub launch_option: LaunchOption,
    pub maneuvers: Vec<ManeuverResult>,
    pub tank_totals: TankMasses,
    pub tank_capacities: TankMasses,
    pub tank_constraints_violated: Vec<Tank>,
    pub solver_iterations: usize,
    pub solver_residual_kg: f64,
}

/// Validate, solve the initial mass, split propellant per tank, and check feasibility.
pub fn compute(
    input: &ComputeInput,
    settings: &SolverSettings,
) -> Result<ComputeResponse, BudgetError> {
    validate_input(input)?;
    settings.check().map_err(ValidationError::SolverSettings)?;
    for maneuver in &input.maneuvers {
        check_family(&maneuver.thruster.family)?;
    }

    let solved = solve_initial_mass(input.dry_mass_kg, &input.maneuvers, settings)?;

    let mut maneuvers = Vec::with_capacity(input.maneuvers.len());
    for (maneuver, step) in input.maneuvers.iter().zip(&solved.sequence.steps) {
        let split = split_propellant(step.propellant_kg, &maneuver.thruster.family)?;
        let burn_time_s = maneuver
            .thruster
            .thrust_n
            .map(|thrust| burn_duration_s(step.propellant_kg, step.isp_effective_s, thrust));
        maneuvers.push(ManeuverResult {
            name: maneuver.name.clone(),
            maneuver_type: maneuver.maneuver_type,
            delta_v_mps: maneuver.delta_v_mps,
            occurrences: maneuver.occurrences,
            total_delta_v_mps: step.total_delta_v_mps,
            thruster: maneuver.thruster.clone(),
            thruster_efficiency: maneuver.thruster_efficiency,
            propellant_kg: step.propellant_kg,
            split,
            m_before_kg: step.m_before_kg,
            m_after_kg: step.m_after_kg,
            burn_duration_s: burn_time_s,
        });
    }

    let tank_totals = TankMasses::from_splits(maneuvers.iter().map(|m| &m.split));
    let feasibility = check_feasibility(
        solved.initial_mass_kg,
        &input.launch_option,
        &tank_totals,
        &input.tanks,
    );

    let total_delta_v_mps: f64 = solved
        .sequence
        .steps
        .iter()
        .map(|s| s.total_delta_v_mps)
        .sum();

    for tank in &feasibility.tank_constraints_violated {
        warn!(
            tank = tank.as_str(),
            load_kg = tank_totals.get(*tank),
            capacity_kg = input.tanks.get(*tank),
            "tank capacity exceeded"
        );
    }
    if feasibility.mass_margin_kg < 0.0 {
        warn!(
            launch_option = %input.launch_option.id,
            mass_margin_kg = feasibility.mass_margin_kg,
            "initial mass exceeds launch capability"
        );
    }
    info!(
        initial_mass_kg = solved.initial_mass_kg,
        total_propellant_kg = solved.sequence.total_propellant_kg,
        feasible = feasibility.feasible,
        "propellant budget computed"
    );

    Ok(ComputeResponse {
        initial_mass_kg: solved.initial_mass_kg,
        dry_mass_kg: input.dry_mass_kg,
        total_propellant_kg: solved.sequence.total_propellant_kg,
        total_delta_v_mps,
        feasible: feasibility.feasible,
        mass_margin_kg: feasibility.mass_margin_kg,
        launch_option: input.launch_option.clone(),
        maneuvers,
        tank_totals,
        tank_capacities: input.tanks,
        tank_constraints_violated: feasibility.tank_constraints_violated,
        solver_iterations: solved.iterations,
        solver_residual_kg: solved.residual_kg,
    })
}
