//! Configuration models and loaders for catalogs and compute requests.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Thruster record as written in catalog files.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThrusterConfig {
    /// Stable identifier; a fresh one is minted when omitted.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub thruster_type: ThrusterTypeConfig,
    pub isp_s: f64,
    #[serde(default)]
    pub mixture_ratio_ox_to_fuel: Option<f64>,
    #[serde(default)]
    pub thrust_n: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ThrusterTypeConfig {
    ChemicalMono,
    ChemicalBiprop,
    ElectricXenon,
}

/// Launch option record as written in catalog files.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LaunchOptionConfig {
    pub id: String,
    pub name: String,
    pub vehicle: String,
    pub delivered_mass_kg: f64,
    pub dv_remaining_to_geo_mps: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Maneuver category. Informational only.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ManeuverTypeConfig {
    OrbitTransfer,
    Nssk,
    Ewsk,
    Disposal,
    #[default]
    Custom,
}

/// One line of the maneuver sequence in a request file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ManeuverConfig {
    pub name: String,
    #[serde(default)]
    pub maneuver_type: ManeuverTypeConfig,
    pub delta_v_mps: f64,
    pub thruster_id: String,
    #[serde(default = "default_occurrences")]
    pub occurrences: u32,
    #[serde(default = "default_efficiency")]
    pub thruster_efficiency: f64,
}

/// Tank capacities available on the spacecraft.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct TankCapacitiesConfig {
    pub hydrazine_kg: f64,
    pub oxidizer_kg: f64,
    pub xenon_kg: f64,
}

/// Overrides for the initial-mass solver.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    #[serde(default = "default_tolerance_kg")]
    pub tolerance_kg: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default = "default_max_expansions")]
    pub max_expansions: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance_kg: default_tolerance_kg(),
            max_iterations: default_max_iterations(),
            max_expansions: default_max_expansions(),
        }
    }
}

/// A full propellant budget request referencing catalog entries by id.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ComputeRequestConfig {
    pub dry_mass_kg: f64,
    pub launch_option_id: String,
    pub maneuvers: Vec<ManeuverConfig>,
    pub tanks: TankCapacitiesConfig,
    #[serde(default)]
    pub solver: Option<SolverConfig>,
}

fn default_occurrences() -> u32 {
    1
}

fn default_efficiency() -> f64 {
    1.0
}

fn default_tolerance_kg() -> f64 {
    1e-6
}

fn default_max_iterations() -> usize {
    100
}

fn default_max_expansions() -> usize {
    100
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load thruster records from a YAML list, a TOML file, or a directory of TOML files.
pub fn load_thrusters<P: AsRef<Path>>(path: P) -> Result<Vec<ThrusterConfig>, ConfigError> {
    load_records(path)
}

/// Load launch option records from a YAML list, a TOML file, or a directory of TOML files.
pub fn load_launch_options<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<LaunchOptionConfig>, ConfigError> {
    load_records(path)
}

/// Load a single compute request from YAML, TOML, or JSON (chosen by extension).
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<ComputeRequestConfig, ConfigError> {
    let path = path.as_ref();
    FileFormat::of(path).read(path)
}

/// Parse a compute request from a JSON document.
pub fn parse_request_json(contents: &str) -> Result<ComputeRequestConfig, ConfigError> {
    Ok(serde_json::from_str(contents)?)
}

/// On-disk encoding, picked from the file extension. Anything unrecognised is read as YAML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Yaml,
    Toml,
    Json,
}

impl FileFormat {
    fn of(path: &Path) -> Self {
        match extension(path) {
            Some("toml") => FileFormat::Toml,
            Some("json") => FileFormat::Json,
            _ => FileFormat::Yaml,
        }
    }

    fn read<T: DeserializeOwned>(self, path: &Path) -> Result<T, ConfigError> {
        match self {
            FileFormat::Toml => Ok(toml::from_str(&std::fs::read_to_string(path)?)?),
            FileFormat::Json => Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?),
            FileFormat::Yaml => Ok(serde_yaml::from_reader(BufReader::new(File::open(path)?))?),
        }
    }
}

/// A directory holds one TOML record per file, read in file-name order. A TOML file is a
/// single record; YAML and JSON files hold a list.
fn load_records<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>, ConfigError> {
    let path = path.as_ref();
    if !path.is_dir() {
        return match FileFormat::of(path) {
            FileFormat::Toml => Ok(vec![FileFormat::Toml.read(path)?]),
            format => format.read(path),
        };
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let file = entry?.path();
        if FileFormat::of(&file) == FileFormat::Toml {
            files.push(file);
        }
    }
    files.sort();
    files
        .iter()
        .map(|file| FileFormat::Toml.read(file))
        .collect()
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
