//! Brent's method root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Brent's method root finder.
///
/// Combines bisection, secant steps and inverse quadratic interpolation.
/// Interpolated steps are accepted only while they shrink the bracket fast
/// enough; otherwise the iteration falls back to a bisection step, so the
/// bracket `[b, c]` always contains a sign change.
///
/// # Example
///
/// ```
/// use copula_core::math::solvers::{BrentSolver, SolverConfig};
///
/// let solver = BrentSolver::new(SolverConfig::default());
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let root = solver.find_root(f, 1.0, 2.0).unwrap();
/// assert!(f(root).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BrentSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BrentSolver<T> {
    /// Create a new Brent solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Find a root of `f` in the bracket `[a, b]` (either orientation).
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - `|f(x)| < tolerance` or the bracket collapsed below tolerance
    /// * `Err(SolverError::NoBracket)` - `f(a)` and `f(b)` have same sign
    /// * `Err(SolverError::NumericalInstability)` - `f` returned NaN
    /// * `Err(SolverError::MaxIterationsExceeded)` - iteration cap reached
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let (mut a, mut b) = (a, b);
        let mut fa = f(a);
        let mut fb = f(b);

        if fa.is_nan() || fb.is_nan() {
            return Err(SolverError::NumericalInstability(format!(
                "non-finite bracket values f({}) = {}, f({}) = {}",
                to_f64(a),
                to_f64(fa),
                to_f64(b),
                to_f64(fb)
            )));
        }
        if fa == T::zero() {
            return Ok(a);
        }
        if fb == T::zero() {
            return Ok(b);
        }
        if (fa > T::zero()) == (fb > T::zero()) {
            return Err(SolverError::NoBracket {
                a: to_f64(a),
                b: to_f64(b),
            });
        }

        let zero = T::zero();
        let one = T::one();
        let two = one + one;
        let three = two + one;
        let half = one / two;
        let tol = self.config.tolerance;

        let mut c = b;
        let mut fc = fb;
        let mut d = b - a;
        let mut e = d;

        for _ in 0..self.config.max_iterations {
            if (fb > zero) == (fc > zero) {
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }
            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }

            let tol1 = two * T::epsilon() * b.abs() + half * tol;
            let xm = half * (c - b);
            if xm.abs() <= tol1 || fb.abs() < tol {
                return Ok(b);
            }

            if e.abs() >= tol1 && fa.abs() > fb.abs() {
                let s = fb / fa;
                let (mut p, mut q) = if a == c {
                    (two * xm * s, one - s)
                } else {
                    let r0 = fa / fc;
                    let r1 = fb / fc;
                    (
                        s * (two * xm * r0 * (r0 - r1) - (b - a) * (r1 - one)),
                        (r0 - one) * (r1 - one) * (s - one),
                    )
                };
                if p > zero {
                    q = -q;
                }
                p = p.abs();

                let bound = (three * xm * q - (tol1 * q).abs()).min((e * q).abs());
                if two * p < bound {
                    e = d;
                    d = p / q;
                } else {
                    d = xm;
                    e = d;
                }
            } else {
                d = xm;
                e = d;
            }

            a = b;
            fa = fb;
            b = if d.abs() > tol1 {
                b + d
            } else if xm > zero {
                b + tol1
            } else {
                b - tol1
            };
            fb = f(b);
            if fb.is_nan() {
                return Err(SolverError::NumericalInstability(format!(
                    "f({}) is NaN",
                    to_f64(b)
                )));
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

#[inline]
pub(crate) fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
