use sat_propulsion::DomainError;
use thiserror::Error;

use crate::solver::SolveError;
use crate::split::SplitError;
use crate::validate::ValidationError;

/// Top-level failure of a propellant budget computation.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),
    #[error("thruster configuration error: {0}")]
    Configuration(#[from] SplitError),
    #[error("internal invariant violated: {0}")]
    Domain(#[from] DomainError),
    #[error("propellant budget could not be solved: {0}")]
    Unsolvable(String),
}

impl BudgetError {
    /// True for caller mistakes (bad input); false for internal computation failures.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            BudgetError::Validation(_) | BudgetError::Configuration(_)
        )
    }
}

impl From<SolveError> for BudgetError {
    fn from(err: SolveError) -> Self {
        match err {
            SolveError::Domain(domain) => BudgetError::Domain(domain),
            SolveError::Unsolvable(reason) => BudgetError::Unsolvable(reason),
        }
    }
}
