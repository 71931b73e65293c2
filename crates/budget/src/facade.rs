//! Resolution of id-based requests against the catalogs.

use sat_catalog::{LaunchOptionCatalog, ThrusterCatalog};
use sat_config::{ComputeRequestConfig, ManeuverTypeConfig, SolverConfig};

use crate::compute::{ComputeInput, ComputeResponse, compute};
use crate::error::BudgetError;
use crate::maneuver::{ManeuverInput, ManeuverType};
use crate::solver::SolverSettings;
use crate::tanks::TankMasses;
use crate::validate::ValidationError;

impl From<SolverConfig> for SolverSettings {
    fn from(config: SolverConfig) -> Self {
        SolverSettings {
            tolerance_kg: config.tolerance_kg,
            max_iterations: config.max_iterations,
            max_expansions: config.max_expansions,
        }
    }
}

impl From<ManeuverTypeConfig> for ManeuverType {
    fn from(config: ManeuverTypeConfig) -> Self {
        match config {
            ManeuverTypeConfig::OrbitTransfer => ManeuverType::OrbitTransfer,
            ManeuverTypeConfig::Nssk => ManeuverType::Nssk,
            ManeuverTypeConfig::Ewsk => ManeuverType::Ewsk,
            ManeuverTypeConfig::Disposal => ManeuverType::Disposal,
            ManeuverTypeConfig::Custom => ManeuverType::Custom,
        }
    }
}

/// Replace catalog references with the records they point at.
pub fn resolve_request(
    request: &ComputeRequestConfig,
    thrusters: &ThrusterCatalog,
    launch_options: &LaunchOptionCatalog,
) -> Result<ComputeInput, ValidationError> {
    let launch_option = launch_options.require(&request.launch_option_id)?.clone();

    let maneuvers = request
        .maneuvers
        .iter()
        .map(|maneuver| {
            let thruster = thrusters.require(&maneuver.thruster_id)?.clone();
            Ok(ManeuverInput {
                name: maneuver.name.clone(),
                maneuver_type: maneuver.maneuver_type.into(),
                delta_v_mps: maneuver.delta_v_mps,
                thruster,
                occurrences: maneuver.occurrences,
                thruster_efficiency: maneuver.thruster_efficiency,
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    Ok(ComputeInput {
        dry_mass_kg: request.dry_mass_kg,
        launch_option,
        maneuvers,
        tanks: TankMasses {
            hydrazine_kg: request.tanks.hydrazine_kg,
            oxidizer_kg: request.tanks.oxidizer_kg,
            xenon_kg: request.tanks.xenon_kg,
        },
    })
}

/// Resolve and compute in one step, honouring any solver override in the request.
pub fn compute_request(
    request: &ComputeRequestConfig,
    thrusters: &ThrusterCatalog,
    launch_options: &LaunchOptionCatalog,
) -> Result<ComputeResponse, BudgetError> {
    let input = resolve_request(request, thrusters, launch_options)?;
    let settings = request.solver.map(SolverSettings::from).unwrap_or_default();
    compute(&input, &settings)
}
