//! Read-only launch option catalog.

use sat_config::LaunchOptionConfig;
use sat_propulsion::LaunchOption;
use tracing::debug;

use crate::CatalogError;

/// Ordered set of launch options. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptionCatalog {
    options: Vec<LaunchOption>,
}

impl LaunchOptionCatalog {
    /// Built-in placeholder presets for common GTO injections.
    pub fn presets() -> Self {
        let options = vec![
            preset(
                "falcon9-gto-3500",
                "Falcon 9 GTO - 3,500 kg",
                "SpaceX Falcon 9",
                3_500.0,
                1_800.0,
                "Editable placeholder - standard GTO injection",
            ),
            preset(
                "falcon9-gto-5500",
                "Falcon 9 GTO - 5,500 kg",
                "SpaceX Falcon 9",
                5_500.0,
                1_500.0,
                "Editable placeholder - supersync GTO",
            ),
            preset(
                "h2a-gto",
                "H-IIA 204 GTO",
                "MHI H-IIA",
                4_100.0,
                1_800.0,
                "Editable placeholder - standard GTO",
            ),
            preset(
                "h3-gto",
                "H3-24L GTO",
                "MHI H3",
                6_500.0,
                1_500.0,
                "Editable placeholder - high performance config",
            ),
            preset(
                "ariane6-gto-62",
                "Ariane 6 A62 GTO",
                "Ariane 6",
                4_500.0,
                1_800.0,
                "Editable placeholder - 2 booster config",
            ),
            preset(
                "ariane6-gto-64",
                "Ariane 6 A64 GTO",
                "Ariane 6",
                11_500.0,
                1_500.0,
                "Editable placeholder - 4 booster config",
            ),
        ];
        Self { options }
    }

    /// Build a catalog from configuration records.
    pub fn from_configs(configs: &[LaunchOptionConfig]) -> Result<Self, CatalogError> {
        let mut options: Vec<LaunchOption> = Vec::with_capacity(configs.len());
        for config in configs {
            if options.iter().any(|o| o.id == config.id) {
                return Err(CatalogError::DuplicateId(config.id.clone()));
            }
            if !(config.delivered_mass_kg > 0.0 && config.delivered_mass_kg.is_finite()) {
                return Err(CatalogError::invalid(
                    "delivered_mass_kg",
                    format!("must be positive (got {})", config.delivered_mass_kg),
                ));
            }
            if !(config.dv_remaining_to_geo_mps >= 0.0) {
                return Err(CatalogError::invalid(
                    "dv_remaining_to_geo_mps",
                    format!("must be non-negative (got {})", config.dv_remaining_to_geo_mps),
                ));
            }
            options.push(LaunchOption {
                id: config.id.clone(),
                name: config.name.clone(),
                vehicle: config.vehicle.clone(),
                delivered_mass_kg: config.delivered_mass_kg,
                dv_remaining_to_geo_mps: config.dv_remaining_to_geo_mps,
                notes: config.notes.clone(),
            });
        }
        debug!(count = options.len(), "launch option catalog loaded");
        Ok(Self { options })
    }

    pub fn list(&self) -> &[LaunchOption] {
        &self.options
    }

    pub fn get(&self, id: &str) -> Option<&LaunchOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Look up a launch option, failing when the id is unknown.
    pub fn require(&self, id: &str) -> Result<&LaunchOption, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::LaunchOptionNotFound(id.to_string()))
    }
}

fn preset(
    id: &str,
    name: &str,
    vehicle: &str,
    delivered_mass_kg: f64,
    dv_remaining_to_geo_mps: f64,
    notes: &str,
) -> LaunchOption {
    LaunchOption {
        id: id.to_string(),
        name: name.to_string(),
        vehicle: vehicle.to_string(),
        delivered_mass_kg,
        dv_remaining_to_geo_mps,
        notes: Some(notes.to_string()),
    }
}
