//! Propellant budget engine: sequential mass depletion, initial-mass solve,
//! per-tank propellant split, and launch/tank feasibility.
//!
//! Every entry point is a pure function of its inputs. The catalog-facing
//! [`facade`] turns id-based requests into resolved value objects first.

pub mod compute;
pub mod facade;
pub mod feasibility;
pub mod maneuver;
pub mod sequence;
pub mod solver;
pub mod split;
pub mod tanks;
pub mod validate;

mod error;

pub use compute::{ComputeInput, ComputeResponse, ManeuverResult, compute};
pub use error::BudgetError;
pub use facade::{compute_request, resolve_request};
pub use feasibility::{Feasibility, check_feasibility};
pub use maneuver::{ManeuverInput, ManeuverType};
pub use sequence::{ManeuverStep, SequenceOutcome, evaluate_sequence};
pub use solver::{
    SolveError, SolvedBudget, SolverSettings, closed_form_initial_mass, solve_initial_mass,
};
pub use split::{PropellantSplit, SplitError, check_family, split_propellant};
pub use tanks::{Tank, TankMasses};
pub use validate::{ValidationError, validate_input};
