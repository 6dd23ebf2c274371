//! Brent → bisection fallback chain and CDF inversion.

use super::{BisectionSolver, BrentSolver, SolverConfig};
use crate::types::{RootFindingFailure, SolverError};
use tracing::debug;

/// Upper bound on the number of doublings performed by [`expand_upper_bracket`].
const MAX_BRACKET_DOUBLINGS: usize = 1100;

/// Floor of the tail-probability factor applied to the quantile tolerance.
const MIN_TAIL_SCALE: f64 = 1e-6;

/// Find a root of `f` on `[a, b]`, falling back to bisection when Brent fails.
///
/// # Errors
///
/// Returns [`RootFindingFailure`] carrying both solver errors when neither
/// method converges within `config.max_iterations`.
///
/// # Example
///
/// ```
/// use copula_core::math::solvers::{find_root_with_fallback, SolverConfig};
///
/// let root = find_root_with_fallback(|x: f64| x.cos() - x, 0.0, 1.0, &SolverConfig::default())
///     .unwrap();
/// assert!((root.cos() - root).abs() < 1e-10);
/// ```
pub fn find_root_with_fallback<F>(
    f: F,
    a: f64,
    b: f64,
    config: &SolverConfig<f64>,
) -> Result<f64, RootFindingFailure>
where
    F: Fn(f64) -> f64,
{
    let primary = match BrentSolver::new(*config).find_root(&f, a, b) {
        Ok(root) => return Ok(root),
        Err(err) => err,
    };

    debug!(error = %primary, a, b, "Brent solver failed, retrying with bisection");

    BisectionSolver::new(*config)
        .find_root(&f, a, b)
        .map_err(|fallback| RootFindingFailure { primary, fallback })
}

/// Quantile of a continuous distribution by root-finding `cdf(x) = p` on `[lo, hi]`.
///
/// Probabilities at or beyond the CDF values of the bracket endpoints are
/// clamped to the corresponding endpoint.
///
/// The tolerance is relative to the smaller tail `min(p, 1 - p)`, so a
/// quantile deep in a flat tail is resolved as finely as a central one.
///
/// # Errors
///
/// Propagates [`RootFindingFailure`] from [`find_root_with_fallback`].
pub fn invert_cdf<F>(
    cdf: F,
    p: f64,
    lo: f64,
    hi: f64,
    config: &SolverConfig<f64>,
) -> Result<f64, RootFindingFailure>
where
    F: Fn(f64) -> f64,
{
    if p <= cdf(lo) {
        return Ok(lo);
    }
    if p >= cdf(hi) {
        return Ok(hi);
    }
    let tail = p.min(1.0 - p).max(MIN_TAIL_SCALE);
    let config = config.with_tolerance(config.tolerance * tail);
    find_root_with_fallback(|x| cdf(x) - p, lo, hi, &config)
}

/// Grow `start` by doubling until `cdf(x) >= p`.
///
/// Used for distributions supported on `[0, ∞)` whose quantile has no
/// a-priori bound.
///
/// # Errors
///
/// Returns `SolverError::NoBracket` if no bound is found before the value
/// overflows.
pub fn expand_upper_bracket<F>(cdf: F, p: f64, start: f64) -> Result<f64, SolverError>
where
    F: Fn(f64) -> f64,
{
    let mut hi = start.max(f64::MIN_POSITIVE);
    for _ in 0..MAX_BRACKET_DOUBLINGS {
        if !hi.is_finite() {
            break;
        }
        if cdf(hi) >= p {
            return Ok(hi);
        }
        hi *= 2.0;
    }
    Err(SolverError::NoBracket { a: start, b: hi })
}
