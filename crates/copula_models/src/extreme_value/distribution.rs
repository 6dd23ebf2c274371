//! Auxiliary distribution of `Z = ln V / ln(UV)`.

use super::PickandsFunction;
use copula_core::math::solvers::{invert_cdf, SolverConfig};
use copula_core::types::RootFindingFailure;

/// Distance from {0, 1} of the quantile search interval.
const DEFAULT_EPSILON: f64 = 1e-12;

/// Law of the auxiliary variable of an extreme-value copula on [0, 1].
///
/// ```text
/// F(z) = z + z(1 - z) A'(z) / A(z)
/// ```
///
/// Together with [`mixing_probability`](Self::mixing_probability) it drives
/// the two-stage sampler of the extreme-value copula.
#[derive(Debug, Clone)]
pub struct ExtremeDistribution<P> {
    pickands: P,
    solver: SolverConfig<f64>,
    epsilon: f64,
}

impl<P: PickandsFunction> ExtremeDistribution<P> {
    /// Distribution induced by `pickands` with default solver settings.
    pub fn new(pickands: P) -> Self {
        Self {
            pickands,
            solver: SolverConfig::default(),
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// Replace the solver settings used by [`quantile`](Self::quantile).
    pub fn with_solver(mut self, solver: SolverConfig<f64>) -> Self {
        self.solver = solver;
        self
    }

    /// Pickands function.
    pub fn pickands(&self) -> &P {
        &self.pickands
    }

    /// CDF F(z), clamped to 0 below the support and 1 above it.
    pub fn cdf(&self, z: f64) -> f64 {
        if z <= 0.0 {
            return 0.0;
        }
        if z >= 1.0 {
            return 1.0;
        }
        let a = &self.pickands;
        z + z * (1.0 - z) * a.first_derivative(z) / a.value(z)
    }

    /// Density F'(z).
    pub fn pdf(&self, z: f64) -> f64 {
        if !(0.0..=1.0).contains(&z) {
            return 0.0;
        }
        let a = &self.pickands;
        let value = a.value(z);
        let d1 = a.first_derivative(z);
        let d2 = a.second_derivative(z);
        let ratio = d1 / value;
        let curvature = if z == 0.0 || z == 1.0 { 0.0 } else { z * (1.0 - z) * d2 / value };
        1.0 + (1.0 - 2.0 * z) * ratio + curvature - z * (1.0 - z) * ratio * ratio
    }

    /// Quantile by root-finding F(z) = p on `[ε, 1 - ε]`.
    ///
    /// # Errors
    ///
    /// Propagates [`RootFindingFailure`] if both solvers fail.
    pub fn quantile(&self, p: f64) -> Result<f64, RootFindingFailure> {
        invert_cdf(|z| self.cdf(z), p, self.epsilon, 1.0 - self.epsilon, &self.solver)
    }

    /// Probability `z(1 - z) A''(z) / (A(z) f(z))` that the copula value
    /// conditional on `Z = z` is uniform rather than a product of two
    /// uniforms; clamped to [0, 1].
    pub fn mixing_probability(&self, z: f64) -> f64 {
        let density = self.pdf(z);
        if !(density > 0.0) || z <= 0.0 || z >= 1.0 {
            return 0.0;
        }
        let a = &self.pickands;
        let p = z * (1.0 - z) * a.second_derivative(z) / (a.value(z) * density);
        p.clamp(0.0, 1.0)
    }
}
