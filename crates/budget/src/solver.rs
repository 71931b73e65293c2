//! Initial wet-mass solve for a fixed dry mass.
//!
//! The residual `R(m) = m - dry - propellant(m)` is increasing in `m` because the
//! fraction of mass each burn consumes does not depend on the absolute mass. The
//! root is bracketed by doubling up from the dry mass and refined by bisection.
//!
//! `R` is evaluated as `final_mass(m) - dry`. Subtracting the propellant from `m`
//! cancels catastrophically once the mass ratio is large, which lets a wrong `m`
//! pass the absolute tolerance.

use sat_core::roots::{BisectionSettings, BracketSearch, RootError, bisect};
use sat_core::units::exhaust_velocity_m_s;
use sat_propulsion::DomainError;
use thiserror::Error;
use tracing::debug;

use crate::maneuver::ManeuverInput;
use crate::sequence::{SequenceOutcome, evaluate_sequence};

/// Fixed termination bounds so results are reproducible across runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverSettings {
    /// Absolute residual accepted as converged (kg).
    pub tolerance_kg: f64,
    pub max_iterations: usize,
    /// Maximum doublings of the upper bound.
    pub max_expansions: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance_kg: 1e-6,
            max_iterations: 100,
            max_expansions: 100,
        }
    }
}

/// Converged initial mass and the sequence flown from it.
#[derive(Debug, Clone, PartialEq)]
pub struct SolvedBudget {
    pub initial_mass_kg: f64,
    pub dry_mass_kg: f64,
    pub sequence: SequenceOutcome,
    pub iterations: usize,
    pub residual_kg: f64,
}

#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("{0}")]
    Unsolvable(String),
}

impl SolverSettings {
    /// Reject settings the bisection cannot run with.
    pub fn check(&self) -> Result<(), &'static str> {
        if !(self.tolerance_kg > 0.0 && self.tolerance_kg.is_finite()) {
            return Err("tolerance_kg must be positive and finite");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1");
        }
        Ok(())
    }
}

/// Solve for the initial mass whose propellant load exactly covers the maneuver list.
pub fn solve_initial_mass(
    dry_mass_kg: f64,
    maneuvers: &[ManeuverInput],
    settings: &SolverSettings,
) -> Result<SolvedBudget, SolveError> {
    let residual = |initial_mass_kg: f64| {
        evaluate_sequence(initial_mass_kg, maneuvers)
            .map(|outcome| outcome.final_mass_kg - dry_mass_kg)
    };

    let root = bisect(
        residual,
        dry_mass_kg,
        BracketSearch::doubling(dry_mass_kg, settings.max_expansions),
        &BisectionSettings {
            tolerance: settings.tolerance_kg,
            max_iterations: settings.max_iterations,
        },
    )
    .map_err(|err| match err {
        RootError::Residual(domain) => SolveError::Domain(domain),
        other => SolveError::Unsolvable(other.to_string()),
    })?;

    debug!(
        initial_mass_kg = root.x,
        iterations = root.iterations,
        expansions = root.expansions,
        residual_kg = root.residual,
        "initial mass solved"
    );

    let sequence = evaluate_sequence(root.x, maneuvers)?;
    Ok(SolvedBudget {
        initial_mass_kg: root.x,
        dry_mass_kg,
        sequence,
        iterations: root.iterations,
        residual_kg: root.residual,
    })
}

/// Closed-form initial mass `dry / exp(-Σ dv / (g0 * isp))`.
pub fn closed_form_initial_mass(
    dry_mass_kg: f64,
    maneuvers: &[ManeuverInput],
) -> Result<f64, DomainError> {
    let mut exponent = 0.0;
    for maneuver in maneuvers {
        let isp = maneuver.effective_isp_s();
        if !(isp > 0.0) {
            return Err(DomainError::NonPositiveIsp(isp));
        }
        exponent += maneuver.total_delta_v_mps() / exhaust_velocity_m_s(isp);
    }
    Ok(dry_mass_kg * exponent.exp())
}
