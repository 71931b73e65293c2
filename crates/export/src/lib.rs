//! Export helpers for JSON and CSV propellant budget artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Buffered sink for an export. `-` is stdout; any other path is created along with
/// its missing parent directories.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    let sink: Box<dyn Write> = if path == Path::new("-") {
        Box::new(io::stdout().lock())
    } else {
        create_parent_dirs(path)?;
        Box::new(File::create(path)?)
    };
    Ok(Box::new(BufWriter::new(sink)))
}

fn create_parent_dirs(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir),
        _ => Ok(()),
    }
}

pub mod report {
    use std::io::Write;

    use chrono::{DateTime, SecondsFormat, Utc};
    use sat_budget::{ComputeResponse, ManeuverResult, TankMasses};
    use sat_propulsion::{LaunchOption, Thruster};
    use serde::Serialize;
    use serde_json::to_writer_pretty;

    /// Thruster as it appears on the wire. Family-specific fields are `null` when absent.
    #[derive(Debug, Serialize)]
    pub struct ThrusterRecord<'a> {
        pub id: &'a str,
        pub name: &'a str,
        pub thruster_type: &'static str,
        pub isp_s: f64,
        pub mixture_ratio_ox_to_fuel: Option<f64>,
        pub thrust_n: Option<f64>,
    }

    impl<'a> From<&'a Thruster> for ThrusterRecord<'a> {
        fn from(thruster: &'a Thruster) -> Self {
            Self {
                id: &thruster.id,
                name: &thruster.name,
                thruster_type: thruster.thruster_type().as_str(),
                isp_s: thruster.isp_s,
                mixture_ratio_ox_to_fuel: thruster.family.mixture_ratio(),
                thrust_n: thruster.thrust_n,
            }
        }
    }

    #[derive(Debug, Serialize)]
    pub struct LaunchOptionRecord<'a> {
        pub id: &'a str,
        pub name: &'a str,
        pub vehicle: &'a str,
        pub delivered_mass_kg: f64,
        pub dv_remaining_to_geo_mps: f64,
        pub notes: Option<&'a str>,
    }

    impl<'a> From<&'a LaunchOption> for LaunchOptionRecord<'a> {
        fn from(option: &'a LaunchOption) -> Self {
            Self {
                id: &option.id,
                name: &option.name,
                vehicle: &option.vehicle,
                delivered_mass_kg: option.delivered_mass_kg,
                dv_remaining_to_geo_mps: option.dv_remaining_to_geo_mps,
                notes: option.notes.as_deref(),
            }
        }
    }

    /// Per-tank masses keyed by tank name.
    #[derive(Debug, Serialize)]
    pub struct TankRecord {
        #[serde(rename = "hydrazine")]
        pub hydrazine_kg: f64,
        #[serde(rename = "oxidizer")]
        pub oxidizer_kg: f64,
        #[serde(rename = "xenon")]
        pub xenon_kg: f64,
    }

    impl From<&TankMasses> for TankRecord {
        fn from(tanks: &TankMasses) -> Self {
            Self {
                hydrazine_kg: tanks.hydrazine_kg,
                oxidizer_kg: tanks.oxidizer_kg,
                xenon_kg: tanks.xenon_kg,
            }
        }
    }

    #[derive(Debug, Serialize)]
    pub struct ManeuverRecord<'a> {
        pub name: &'a str,
        pub maneuver_type: &'static str,
        pub delta_v_mps: f64,
        pub occurrences: u32,
        pub total_delta_v_mps: f64,
        pub thruster: ThrusterRecord<'a>,
        pub thruster_efficiency: f64,
        pub propellant_kg: f64,
        pub ox_kg: Option<f64>,
        pub fuel_kg: Option<f64>,
        pub xenon_kg: Option<f64>,
        pub m_before_kg: f64,
        pub m_after_kg: f64,
        pub burn_duration_s: Option<f64>,
    }

    impl<'a> From<&'a ManeuverResult> for ManeuverRecord<'a> {
        fn from(result: &'a ManeuverResult) -> Self {
            Self {
                name: &result.name,
                maneuver_type: result.maneuver_type.as_str(),
                delta_v_mps: result.delta_v_mps,
                occurrences: result.occurrences,
                total_delta_v_mps: result.total_delta_v_mps,
                thruster: ThrusterRecord::from(&result.thruster),
                thruster_efficiency: result.thruster_efficiency,
                propellant_kg: result.propellant_kg,
                ox_kg: result.split.ox_kg(),
                fuel_kg: result.split.fuel_kg(),
                xenon_kg: result.split.xenon_kg(),
                m_before_kg: result.m_before_kg,
                m_after_kg: result.m_after_kg,
                burn_duration_s: result.burn_duration_s,
            }
        }
    }

    /// Serializable view of a compute response.
    #[derive(Debug, Serialize)]
    pub struct ComputeReport<'a> {
        pub initial_mass_kg: f64,
        pub dry_mass_kg: f64,
        pub total_propellant_kg: f64,
        pub total_delta_v_mps: f64,
        pub feasible: bool,
        pub mass_margin_kg: f64,
        pub launch_option: LaunchOptionRecord<'a>,
        pub maneuvers: Vec<ManeuverRecord<'a>>,
        pub tank_totals: TankRecord,
        pub tank_capacities: TankRecord,
        pub tank_constraints_violated: Vec<&'static str>,
        pub solver_iterations: usize,
    }

    impl<'a> From<&'a ComputeResponse> for ComputeReport<'a> {
        fn from(response: &'a ComputeResponse) -> Self {
            Self {
                initial_mass_kg: response.initial_mass_kg,
                dry_mass_kg: response.dry_mass_kg,
                total_propellant_kg: response.total_propellant_kg,
                total_delta_v_mps: response.total_delta_v_mps,
                feasible: response.feasible,
                mass_margin_kg: response.mass_margin_kg,
                launch_option: LaunchOptionRecord::from(&response.launch_option),
                maneuvers: response.maneuvers.iter().map(ManeuverRecord::from).collect(),
                tank_totals: TankRecord::from(&response.tank_totals),
                tank_capacities: TankRecord::from(&response.tank_capacities),
                tank_constraints_violated: response
                    .tank_constraints_violated
                    .iter()
                    .map(|tank| tank.as_str())
                    .collect(),
                solver_iterations: response.solver_iterations,
            }
        }
    }

    #[derive(Serialize)]
    struct Envelope<'a> {
        generated_at: String,
        #[serde(flatten)]
        report: ComputeReport<'a>,
    }

    /// Serialize a response to a JSON value (no envelope).
    pub fn to_value(response: &ComputeResponse) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(ComputeReport::from(response))
    }

    /// Write a pretty-printed response stamped with its generation time.
    pub fn write_json<W: Write>(
        writer: W,
        response: &ComputeResponse,
        generated_at: DateTime<Utc>,
    ) -> serde_json::Result<()> {
        let envelope = Envelope {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            report: ComputeReport::from(response),
        };
        to_writer_pretty(writer, &envelope)
    }

    /// Write a thruster catalog listing.
    pub fn write_thrusters<W: Write>(writer: W, thrusters: &[Thruster]) -> serde_json::Result<()> {
        let records: Vec<ThrusterRecord<'_>> = thrusters.iter().map(ThrusterRecord::from).collect();
        to_writer_pretty(writer, &records)
    }

    /// Write a launch option catalog listing.
    pub fn write_launch_options<W: Write>(
        writer: W,
        options: &[LaunchOption],
    ) -> serde_json::Result<()> {
        let records: Vec<LaunchOptionRecord<'_>> =
            options.iter().map(LaunchOptionRecord::from).collect();
        to_writer_pretty(writer, &records)
    }
}

pub mod table {
    use std::io::Write;

    use sat_budget::ComputeResponse;
    use serde::Serialize;

    /// One CSV row per maneuver. Split columns are left empty when not applicable.
    #[derive(Debug, Serialize)]
    struct Row<'a> {
        index: usize,
        name: &'a str,
        maneuver_type: &'static str,
        thruster_id: &'a str,
        thruster_type: &'static str,
        delta_v_mps: f64,
        occurrences: u32,
        total_delta_v_mps: f64,
        thruster_efficiency: f64,
        m_before_kg: f64,
        m_after_kg: f64,
        propellant_kg: f64,
        fuel_kg: Option<f64>,
        ox_kg: Option<f64>,
        xenon_kg: Option<f64>,
        burn_duration_s: Option<f64>,
    }

    /// Write the per-maneuver breakdown with a header row.
    pub fn write_csv<W: Write>(writer: W, response: &ComputeResponse) -> Result<(), csv::Error> {
        let mut out = csv::Writer::from_writer(writer);
        for (i, result) in response.maneuvers.iter().enumerate() {
            out.serialize(Row {
                index: i + 1,
                name: &result.name,
                maneuver_type: result.maneuver_type.as_str(),
                thruster_id: &result.thruster.id,
                thruster_type: result.thruster.thruster_type().as_str(),
                delta_v_mps: result.delta_v_mps,
                occurrences: result.occurrences,
                total_delta_v_mps: result.total_delta_v_mps,
                thruster_efficiency: result.thruster_efficiency,
                m_before_kg: result.m_before_kg,
                m_after_kg: result.m_after_kg,
                propellant_kg: result.propellant_kg,
                fuel_kg: result.split.fuel_kg(),
                ox_kg: result.split.ox_kg(),
                xenon_kg: result.split.xenon_kg(),
                burn_duration_s: result.burn_duration_s,
            })?;
        }
        out.flush()?;
        Ok(())
    }
}
