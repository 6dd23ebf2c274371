//! Termination settings for bracketed root-finding.

use num_traits::Float;

/// Stopping rule shared by [`BrentSolver`](super::BrentSolver),
/// [`BisectionSolver`](super::BisectionSolver) and every quantile or
/// calibration search built on them.
///
/// A search stops once `|f(x)|` or the half-width of the bracket falls below
/// `tolerance`, or fails after `max_iterations` steps.
///
/// ```
/// use copula_core::math::solvers::SolverConfig;
///
/// let config = SolverConfig::<f64>::calibration().with_max_iterations(400);
/// assert_eq!(config.tolerance, 1e-12);
/// assert_eq!(config.max_iterations, 400);
/// assert!(config.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Absolute tolerance on `|f(x)|` and on the bracket half-width.
    pub tolerance: T,
    /// Step budget; exhausting it yields `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Tolerance 1e-10 with 100 steps, enough for quantiles of bounded CDFs.
    fn default() -> Self {
        Self::preset(1e-10, 100)
    }
}

impl<T: Float> SolverConfig<T> {
    fn preset(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance: T::from(tolerance).unwrap_or_else(T::epsilon),
            max_iterations,
        }
    }

    /// Stopping rule with explicit values.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        let config = Self {
            tolerance,
            max_iterations,
        };
        assert!(config.is_valid(), "tolerance and max_iterations must be positive");
        config
    }

    /// Tolerance 1e-12 with 200 steps. Parameter inversion runs over wide
    /// brackets such as `[1, 1e6]`, which need the larger budget.
    pub fn calibration() -> Self {
        Self::preset(1e-12, 200)
    }

    /// Tolerance 1e-14 with 500 steps.
    pub fn high_precision() -> Self {
        Self::preset(1e-14, 500)
    }

    /// Tolerance 1e-6 with 50 steps.
    pub fn fast() -> Self {
        Self::preset(1e-6, 50)
    }

    /// Same step budget, new tolerance.
    pub fn with_tolerance(self, tolerance: T) -> Self {
        Self { tolerance, ..self }
    }

    /// Same tolerance, new step budget.
    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }

    /// Whether a search under this rule can terminate successfully.
    pub fn is_valid(&self) -> bool {
        self.tolerance > T::zero() && self.max_iterations > 0
    }
}
