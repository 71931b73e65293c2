//! Bracketing bisection for monotonically increasing residual functions.
//!
//! The residual is allowed to fail (it usually wraps a physical model with its own
//! invariants); such failures abort the search and are handed back unchanged inside
//! [`RootError::Residual`]. Every loop is capped, so a search either returns a root
//! whose residual magnitude is below the tolerance or reports why it could not.

use thiserror::Error;
use tracing::debug;

/// Strategy used to locate the upper end of the bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BracketSearch {
    /// Use a known upper bound. The residual must already be non-negative there.
    Fixed { hi: f64 },
    /// Start at `start` and multiply by `factor` until the residual becomes non-negative.
    Expanding {
        start: f64,
        factor: f64,
        max_expansions: usize,
    },
}

impl BracketSearch {
    /// Doubling search starting at `start`, as used for mass-like quantities.
    pub fn doubling(start: f64, max_expansions: usize) -> Self {
        BracketSearch::Expanding {
            start,
            factor: 2.0,
            max_expansions,
        }
    }
}

/// Termination criteria for the bisection phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionSettings {
    /// Absolute residual magnitude accepted as converged.
    pub tolerance: f64,
    /// Hard cap on bisection steps.
    pub max_iterations: usize,
}

/// A converged root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    pub x: f64,
    pub residual: f64,
    /// Bisection steps taken (zero when a bracket end already satisfied the tolerance).
    pub iterations: usize,
    /// Bracket expansions performed before bisection started.
    pub expansions: usize,
}

#[derive(Debug, Error)]
pub enum RootError<E> {
    #[error("residual evaluation failed: {0}")]
    Residual(#[source] E),
    #[error("invalid root search parameters: {0}")]
    InvalidParameters(&'static str),
    #[error("residual {residual} at lower bound {lo} is already positive")]
    LowerBoundPastRoot { lo: f64, residual: f64 },
    #[error("no sign change found up to {hi} after {expansions} expansions")]
    NotBracketed { hi: f64, expansions: usize },
    #[error("residual is not finite at x = {x}")]
    NonFinite { x: f64 },
    #[error("bisection did not converge within {iterations} iterations (last residual {residual})")]
    NotConverged { iterations: usize, residual: f64 },
}

/// Find `x >= lo` with `|f(x)| < tolerance` for an increasing residual `f`.
///
/// Requires `f(lo) <= 0`. The upper bound comes from `search`; bisection then halves
/// `[lo, hi]` until the residual at the midpoint is inside the tolerance.
pub fn bisect<F, E>(
    mut residual: F,
    lo: f64,
    search: BracketSearch,
    settings: &BisectionSettings,
) -> Result<Root, RootError<E>>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    if !(settings.tolerance > 0.0) || !settings.tolerance.is_finite() {
        return Err(RootError::InvalidParameters("tolerance must be positive and finite"));
    }
    if settings.max_iterations == 0 {
        return Err(RootError::InvalidParameters("max_iterations must be at least 1"));
    }
    if !lo.is_finite() {
        return Err(RootError::InvalidParameters("lower bound must be finite"));
    }

    let mut eval = |x: f64| -> Result<f64, RootError<E>> {
        let r = residual(x).map_err(RootError::Residual)?;
        if r.is_finite() {
            Ok(r)
        } else {
            Err(RootError::NonFinite { x })
        }
    };

    let r_lo = eval(lo)?;
    if r_lo.abs() < settings.tolerance {
        return Ok(Root {
            x: lo,
            residual: r_lo,
            iterations: 0,
            expansions: 0,
        });
    }
    if r_lo > 0.0 {
        return Err(RootError::LowerBoundPastRoot { lo, residual: r_lo });
    }

    let (mut hi, r_hi, expansions) = match search {
        BracketSearch::Fixed { hi } => {
            if !(hi > lo) || !hi.is_finite() {
                return Err(RootError::InvalidParameters("upper bound must exceed lower bound"));
            }
            let r_hi = eval(hi)?;
            if r_hi < 0.0 {
                return Err(RootError::NotBracketed { hi, expansions: 0 });
            }
            (hi, r_hi, 0)
        }
        BracketSearch::Expanding {
            start,
            factor,
            max_expansions,
        } => {
            if !(start > 0.0) || !start.is_finite() {
                return Err(RootError::InvalidParameters("expansion start must be positive"));
            }
            if !(factor > 1.0) || !factor.is_finite() {
                return Err(RootError::InvalidParameters("expansion factor must exceed 1"));
            }
            let mut hi = start.max(lo);
            let mut r_hi = eval(hi)?;
            let mut expansions = 0;
            while r_hi < 0.0 {
                if expansions == max_expansions {
                    return Err(RootError::NotBracketed { hi, expansions });
                }
                hi *= factor;
                expansions += 1;
                if !hi.is_finite() {
                    return Err(RootError::NotBracketed { hi, expansions });
                }
                r_hi = eval(hi)?;
            }
            debug!(hi, expansions, "bracket located");
            (hi, r_hi, expansions)
        }
    };

    if r_hi.abs() < settings.tolerance {
        return Ok(Root {
            x: hi,
            residual: r_hi,
            iterations: 0,
            expansions,
        });
    }

    let mut lo = lo;
    let mut last = r_hi;
    for iteration in 1..=settings.max_iterations {
        let mid = 0.5 * (lo + hi);
        let r_mid = eval(mid)?;
        last = r_mid;
        if r_mid.abs() < settings.tolerance {
            debug!(x = mid, residual = r_mid, iteration, "bisection converged");
            return Ok(Root {
                x: mid,
                residual: r_mid,
                iterations: iteration,
                expansions,
            });
        }
        if r_mid > 0.0 {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    Err(RootError::NotConverged {
        iterations: settings.max_iterations,
        residual: last,
    })
}
