//! Thruster catalog with create/read/update/delete semantics.

use sat_config::{ThrusterConfig, ThrusterTypeConfig};
use sat_propulsion::{PropellantFamily, Thruster, ThrusterType};
use tracing::{debug, info};
use uuid::Uuid;

use crate::CatalogError;

const MAX_NAME_LEN: usize = 100;
const MAX_ISP_S: f64 = 5_000.0;
const MAX_MIXTURE_RATIO: f64 = 10.0;

/// Fields required to create a thruster.
#[derive(Debug, Clone, PartialEq)]
pub struct ThrusterDraft {
    pub name: String,
    pub thruster_type: ThrusterType,
    pub isp_s: f64,
    pub mixture_ratio_ox_to_fuel: Option<f64>,
    pub thrust_n: Option<f64>,
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThrusterPatch {
    pub name: Option<String>,
    pub thruster_type: Option<ThrusterType>,
    pub isp_s: Option<f64>,
    pub mixture_ratio_ox_to_fuel: Option<f64>,
    pub thrust_n: Option<f64>,
}

/// Ordered, in-memory thruster store.
#[derive(Debug, Clone, Default)]
pub struct ThrusterCatalog {
    thrusters: Vec<Thruster>,
}

impl ThrusterCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with the stock monopropellant REA and bipropellant LAE.
    pub fn with_defaults() -> Self {
        let thrusters = vec![
            Thruster {
                id: "rea-22n-mono".to_string(),
                name: "REA 22N (Mono)".to_string(),
                family: PropellantFamily::ChemicalMono,
                isp_s: 220.0,
                thrust_n: Some(22.0),
            },
            Thruster {
                id: "lae-490n-biprop".to_string(),
                name: "LAE 490N (Biprop)".to_string(),
                family: PropellantFamily::ChemicalBiprop {
                    mixture_ratio_ox_to_fuel: 0.8,
                },
                isp_s: 320.0,
                thrust_n: Some(490.0),
            },
        ];
        Self { thrusters }
    }

    /// Build a catalog from configuration records, validating each one.
    pub fn from_configs(configs: &[ThrusterConfig]) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for config in configs {
            let id = config.id.clone().unwrap_or_else(new_id);
            let thruster = build_thruster(id, &draft_from_config(config))?;
            catalog.insert(thruster)?;
        }
        debug!(count = catalog.thrusters.len(), "thruster catalog loaded");
        Ok(catalog)
    }

    pub fn list(&self) -> &[Thruster] {
        &self.thrusters
    }

    pub fn get(&self, id: &str) -> Option<&Thruster> {
        self.thrusters.iter().find(|t| t.id == id)
    }

    /// Look up a thruster, failing when the id is unknown.
    pub fn require(&self, id: &str) -> Result<&Thruster, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::ThrusterNotFound(id.to_string()))
    }

    /// Validate and store a new thruster under a freshly minted id.
    ///
    /// A mixture ratio supplied for a non-bipropellant family is dropped.
    pub fn create(&mut self, draft: ThrusterDraft) -> Result<&Thruster, CatalogError> {
        let thruster = build_thruster(new_id(), &draft)?;
        info!(id = %thruster.id, name = %thruster.name, "thruster created");
        self.insert(thruster)
    }

    /// Store an already validated thruster, rejecting duplicate ids.
    pub fn insert(&mut self, thruster: Thruster) -> Result<&Thruster, CatalogError> {
        if self.get(&thruster.id).is_some() {
            return Err(CatalogError::DuplicateId(thruster.id));
        }
        self.thrusters.push(thruster);
        Ok(&self.thrusters[self.thrusters.len() - 1])
    }

    /// Merge `patch` into the stored record. The merged record must still validate.
    pub fn update(&mut self, id: &str, patch: ThrusterPatch) -> Result<&Thruster, CatalogError> {
        let index = self
            .thrusters
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CatalogError::ThrusterNotFound(id.to_string()))?;
        let existing = &self.thrusters[index];

        let draft = ThrusterDraft {
            name: patch.name.unwrap_or_else(|| existing.name.clone()),
            thruster_type: patch.thruster_type.unwrap_or(existing.thruster_type()),
            isp_s: patch.isp_s.unwrap_or(existing.isp_s),
            mixture_ratio_ox_to_fuel: patch
                .mixture_ratio_ox_to_fuel
                .or(existing.family.mixture_ratio()),
            thrust_n: patch.thrust_n.or(existing.thrust_n),
        };
        let updated = build_thruster(existing.id.clone(), &draft)?;
        info!(id = %updated.id, "thruster updated");
        self.thrusters[index] = updated;
        Ok(&self.thrusters[index])
    }

    /// Remove a thruster, returning the removed record.
    pub fn delete(&mut self, id: &str) -> Result<Thruster, CatalogError> {
        let index = self
            .thrusters
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CatalogError::ThrusterNotFound(id.to_string()))?;
        info!(id, "thruster deleted");
        Ok(self.thrusters.remove(index))
    }
}

/// Map the configuration family tag onto the runtime one.
pub fn thruster_type_from_config(kind: ThrusterTypeConfig) -> ThrusterType {
    match kind {
        ThrusterTypeConfig::ChemicalMono => ThrusterType::ChemicalMono,
        ThrusterTypeConfig::ChemicalBiprop => ThrusterType::ChemicalBiprop,
        ThrusterTypeConfig::ElectricXenon => ThrusterType::ElectricXenon,
    }
}

fn draft_from_config(config: &ThrusterConfig) -> ThrusterDraft {
    ThrusterDraft {
        name: config.name.clone(),
        thruster_type: thruster_type_from_config(config.thruster_type),
        isp_s: config.isp_s,
        mixture_ratio_ox_to_fuel: config.mixture_ratio_ox_to_fuel,
        thrust_n: config.thrust_n,
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn build_thruster(id: String, draft: &ThrusterDraft) -> Result<Thruster, CatalogError> {
    let name_len = draft.name.chars().count();
    if name_len == 0 || name_len > MAX_NAME_LEN {
        return Err(CatalogError::invalid(
            "name",
            format!("must be 1-{MAX_NAME_LEN} characters"),
        ));
    }
    if !(draft.isp_s > 0.0 && draft.isp_s <= MAX_ISP_S) {
        return Err(CatalogError::invalid(
            "isp_s",
            format!("must be in (0, {MAX_ISP_S}] s (got {})", draft.isp_s),
        ));
    }
    if let Some(thrust) = draft.thrust_n {
        if !(thrust > 0.0 && thrust.is_finite()) {
            return Err(CatalogError::invalid(
                "thrust_n",
                format!("must be positive (got {thrust})"),
            ));
        }
    }

    let family = match draft.thruster_type {
        ThrusterType::ChemicalMono => PropellantFamily::ChemicalMono,
        ThrusterType::ElectricXenon => PropellantFamily::ElectricXenon,
        ThrusterType::ChemicalBiprop => {
            let ratio = draft
                .mixture_ratio_ox_to_fuel
                .ok_or(CatalogError::MissingMixtureRatio)?;
            if !(ratio > 0.0 && ratio <= MAX_MIXTURE_RATIO) {
                return Err(CatalogError::invalid(
                    "mixture_ratio_ox_to_fuel",
                    format!("must be in (0, {MAX_MIXTURE_RATIO}] (got {ratio})"),
                ));
            }
            PropellantFamily::ChemicalBiprop {
                mixture_ratio_ox_to_fuel: ratio,
            }
        }
    };

    Ok(Thruster {
        id,
        name: draft.name.clone(),
        family,
        isp_s: draft.isp_s,
        thrust_n: draft.thrust_n,
    })
}
