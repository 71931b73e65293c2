use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;
use clap::{Args, Parser, Subcommand, ValueEnum};
use satellite_propellant_budget::budget::{BudgetError, ComputeResponse, Tank, compute_request};
use satellite_propellant_budget::catalog::{CatalogError, LaunchOptionCatalog, ThrusterCatalog};
use satellite_propellant_budget::config::{
    ConfigError, load_launch_options, load_request, load_thrusters,
};
use satellite_propellant_budget::export::{report, table, writer_for_path};
use satellite_propellant_budget::units::kg_to_tonnes;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Size the propellant load of a satellite for an ordered maneuver sequence.
#[derive(Parser, Debug)]
#[command(author, version, about = "Satellite propellant budget calculator")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve the initial mass and per-tank loads for a request file
    Compute(ComputeArgs),
    /// List the thruster catalog
    Thrusters(ThrusterListArgs),
    /// List the launch option catalog
    LaunchOptions(LaunchListArgs),
}

#[derive(Args, Debug)]
struct ComputeArgs {
    /// Request file (YAML, TOML or JSON)
    #[arg(long)]
    request: PathBuf,

    /// Thruster catalog path (defaults to the built-in REA and LAE)
    #[arg(long)]
    thrusters: Option<PathBuf>,

    /// Launch option catalog path (defaults to the built-in presets)
    #[arg(long)]
    launch_options: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Output file (use '-' for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

#[derive(Args, Debug)]
struct ThrusterListArgs {
    /// Thruster catalog path (defaults to the built-in REA and LAE)
    #[arg(long)]
    catalog: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ListFormat::Text)]
    format: ListFormat,
}

#[derive(Args, Debug)]
struct LaunchListArgs {
    /// Launch option catalog path (defaults to the built-in presets)
    #[arg(long)]
    catalog: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ListFormat::Text)]
    format: ListFormat,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum OutputFormat {
    Json,
    Csv,
    Text,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum ListFormat {
    Json,
    Text,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            if is_input_error(&err) {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Bad files, unknown references and invalid requests are the caller's to fix.
fn is_input_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        if let Some(budget) = cause.downcast_ref::<BudgetError>() {
            return budget.is_input_error();
        }
        cause.is::<ConfigError>() || cause.is::<CatalogError>()
    })
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Compute(args) => run_compute(args),
        Command::Thrusters(args) => run_thrusters(args),
        Command::LaunchOptions(args) => run_launch_options(args),
    }
}

fn run_compute(args: ComputeArgs) -> anyhow::Result<()> {
    let thrusters = thruster_catalog(args.thrusters.as_deref())?;
    let launch_options = launch_catalog(args.launch_options.as_deref())?;
    let request = load_request(&args.request)
        .with_context(|| format!("loading request {}", args.request.display()))?;

    debug!(
        request = %args.request.display(),
        thrusters = thrusters.list().len(),
        launch_options = launch_options.list().len(),
        maneuvers = request.maneuvers.len(),
        "request loaded"
    );

    let response = compute_request(&request, &thrusters, &launch_options)?;

    let mut writer = writer_for_path(&args.output)
        .with_context(|| format!("opening output {}", args.output.display()))?;
    match args.format {
        OutputFormat::Json => {
            report::write_json(&mut writer, &response, Utc::now())?;
            writeln!(writer)?;
        }
        OutputFormat::Csv => table::write_csv(&mut writer, &response)?,
        OutputFormat::Text => print_summary(&mut writer, &response)?,
    }
    writer.flush()?;
    Ok(())
}

fn run_thrusters(args: ThrusterListArgs) -> anyhow::Result<()> {
    let catalog = thruster_catalog(args.catalog.as_deref())?;
    let mut out = std::io::stdout().lock();
    match args.format {
        ListFormat::Json => {
            report::write_thrusters(&mut out, catalog.list())?;
            writeln!(out)?;
        }
        ListFormat::Text => {
            for thruster in catalog.list() {
                let mr = thruster
                    .family
                    .mixture_ratio()
                    .map(|mr| format!("  MR {mr:.2}"))
                    .unwrap_or_default();
                writeln!(
                    out,
                    "{:<20} {:<24} {:<15} Isp {:>7.1} s{}",
                    thruster.id,
                    thruster.name,
                    thruster.thruster_type().as_str(),
                    thruster.isp_s,
                    mr
                )?;
            }
        }
    }
    Ok(())
}

fn run_launch_options(args: LaunchListArgs) -> anyhow::Result<()> {
    let catalog = launch_catalog(args.catalog.as_deref())?;
    let mut out = std::io::stdout().lock();
    match args.format {
        ListFormat::Json => {
            report::write_launch_options(&mut out, catalog.list())?;
            writeln!(out)?;
        }
        ListFormat::Text => {
            for option in catalog.list() {
                writeln!(
                    out,
                    "{:<18} {:<28} {:>8.1} kg  Δv to GEO {:>7.1} m/s",
                    option.id,
                    option.name,
                    option.delivered_mass_kg,
                    option.dv_remaining_to_geo_mps
                )?;
            }
        }
    }
    Ok(())
}

fn thruster_catalog(path: Option<&Path>) -> anyhow::Result<ThrusterCatalog> {
    let Some(path) = path else {
        return Ok(ThrusterCatalog::with_defaults());
    };
    let configs =
        load_thrusters(path).with_context(|| format!("loading thrusters {}", path.display()))?;
    Ok(ThrusterCatalog::from_configs(&configs)?)
}

fn launch_catalog(path: Option<&Path>) -> anyhow::Result<LaunchOptionCatalog> {
    let Some(path) = path else {
        return Ok(LaunchOptionCatalog::presets());
    };
    let configs = load_launch_options(path)
        .with_context(|| format!("loading launch options {}", path.display()))?;
    Ok(LaunchOptionCatalog::from_configs(&configs)?)
}

fn print_summary<W: Write>(out: &mut W, response: &ComputeResponse) -> std::io::Result<()> {
    writeln!(out, "=== Propellant Budget ===")?;
    writeln!(
        out,
        "Launch option  : {} ({})",
        response.launch_option.name, response.launch_option.vehicle
    )?;
    writeln!(
        out,
        "Initial mass   : {:.1} kg ({:.3} t)",
        response.initial_mass_kg,
        kg_to_tonnes(response.initial_mass_kg)
    )?;
    writeln!(out, "Dry mass       : {:.1} kg", response.dry_mass_kg)?;
    writeln!(
        out,
        "Propellant     : {:.1} kg ({:.3} t)",
        response.total_propellant_kg,
        kg_to_tonnes(response.total_propellant_kg)
    )?;
    writeln!(out, "Total Δv       : {:.1} m/s", response.total_delta_v_mps)?;
    writeln!(out, "Mass margin    : {:.1} kg", response.mass_margin_kg)?;
    writeln!(out)?;

    writeln!(out, "--- Maneuvers ---")?;
    for (i, m) in response.maneuvers.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {:<24} {:>8.1} m/s  {:>9.2} kg  [{:.1} -> {:.1} kg]",
            i + 1,
            m.name,
            m.total_delta_v_mps,
            m.propellant_kg,
            m.m_before_kg,
            m.m_after_kg
        )?;
        if let Some(duration) = m.burn_duration_s {
            writeln!(out, "    burn time ≈ {:.0} s on {}", duration, m.thruster.name)?;
        }
    }
    writeln!(out)?;

    writeln!(out, "--- Tanks ---")?;
    for tank in Tank::ALL {
        let flag = if response.tank_constraints_violated.contains(&tank) {
            "  EXCEEDED"
        } else {
            ""
        };
        writeln!(
            out,
            "{:<10} {:>9.2} / {:>9.2} kg{}",
            tank.as_str(),
            response.tank_totals.get(tank),
            response.tank_capacities.get(tank),
            flag
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Feasible       : {}",
        if response.feasible { "yes" } else { "no" }
    )?;
    Ok(())
}
