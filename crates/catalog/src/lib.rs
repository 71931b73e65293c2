//! In-memory catalogs supplying thruster and launch-option value objects.

pub mod launch;
pub mod thrusters;

pub use launch::LaunchOptionCatalog;
pub use thrusters::{ThrusterCatalog, ThrusterDraft, ThrusterPatch};

use thiserror::Error;

/// Errors surfaced by catalog lookups and mutations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("thruster '{0}' not found")]
    ThrusterNotFound(String),
    #[error("launch option '{0}' not found")]
    LaunchOptionNotFound(String),
    #[error("duplicate catalog id '{0}'")]
    DuplicateId(String),
    #[error("Mixture ratio is required for bipropellant thrusters")]
    MissingMixtureRatio,
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl CatalogError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CatalogError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
