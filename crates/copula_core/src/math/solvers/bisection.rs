//! Bisection root-finding solver.

use super::brent::to_f64;
use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Plain bisection on a sign-changing bracket.
///
/// Slow but insensitive to noise in `f`: it only ever looks at signs. Used
/// as the second step of [`find_root_with_fallback`](super::find_root_with_fallback).
///
/// # Example
///
/// ```
/// use copula_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::default());
/// let root = solver.find_root(|x: f64| x.exp() - 2.0, 0.0, 1.0).unwrap();
/// assert!((root - 2.0_f64.ln()).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Find a root of `f` in `[a, b]`.
    ///
    /// Stops when the half-width of the bracket or `|f(mid)|` is below the
    /// tolerance.
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let (mut lo, mut hi) = if a <= b { (a, b) } else { (b, a) };
        let mut f_lo = f(lo);
        let f_hi = f(hi);

        if f_lo.is_nan() || f_hi.is_nan() {
            return Err(SolverError::NumericalInstability(format!(
                "non-finite bracket values on [{}, {}]",
                to_f64(lo),
                to_f64(hi)
            )));
        }
        if f_lo == T::zero() {
            return Ok(lo);
        }
        if f_hi == T::zero() {
            return Ok(hi);
        }
        if (f_lo > T::zero()) == (f_hi > T::zero()) {
            return Err(SolverError::NoBracket {
                a: to_f64(lo),
                b: to_f64(hi),
            });
        }

        let two = T::one() + T::one();
        for _ in 0..self.config.max_iterations {
            let half_width = (hi - lo) / two;
            let mid = lo + half_width;
            let f_mid = f(mid);

            if f_mid.is_nan() {
                return Err(SolverError::NumericalInstability(format!(
                    "f({}) is NaN",
                    to_f64(mid)
                )));
            }
            if f_mid == T::zero()
                || half_width < self.config.tolerance
                || f_mid.abs() < self.config.tolerance
            {
                return Ok(mid);
            }
            if (f_mid > T::zero()) == (f_lo > T::zero()) {
                lo = mid;
                f_lo = f_mid;
            } else {
                hi = mid;
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
