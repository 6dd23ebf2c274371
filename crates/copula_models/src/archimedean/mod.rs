//! Archimedean generators and the copulas they induce.
//!
//! A generator φ: [0, ∞) → [0, 1] is continuous, non-increasing and convex
//! with φ(0) = 1 and φ(∞) = 0. It induces the d-dimensional copula
//!
//! ```text
//! C(u₁, …, u_d) = φ(φ⁻¹(u₁) + … + φ⁻¹(u_d))
//! ```
//!
//! whenever φ is d-monotone. Every family implements [`Generator`]; the
//! closed set of families is wrapped by [`ArchimedeanGenerator`] for static
//! dispatch, and [`GeneratorFamily`] carries the per-family smart
//! constructor and dependence-measure formulas.
//!
//! ## Families
//!
//! | Family | Parameter range | Independence at | Frailty |
//! |--------|-----------------|-----------------|---------|
//! | Clayton | θ ≥ -1 | θ = 0 | Gamma (θ > 0) |
//! | Gumbel | θ ≥ 1 | θ = 1 | positive stable |
//! | Frank | θ ∈ ℝ | θ = 0 | logarithmic (θ > 0) |
//! | Joe | θ ≥ 1 | θ = 1 | Sibuya |
//! | Ali–Mikhail–Haq | -1 ≤ θ ≤ 1 | θ = 0 | geometric (0 < θ < 1) |

mod amh;
mod clayton;
mod copula;
mod critical_values;
mod family;
mod frailty;
mod frank;
mod generator;
mod gumbel;
mod independence;
mod joe;
pub mod measures;

pub use amh::AmhGenerator;
pub use clayton::ClaytonGenerator;
pub use copula::{log_density, ArchimedeanCopula};
pub use critical_values::{amh_critical_values, CriticalValueTable, CRITICAL_VALUE_STEP};
pub use family::GeneratorFamily;
pub use frailty::Frailty;
pub use frank::FrankGenerator;
pub use generator::ArchimedeanGenerator;
pub use gumbel::GumbelGenerator;
pub use independence::IndependenceGenerator;
pub use joe::JoeGenerator;

use std::fmt;

/// Maximal monotonicity of a generator.
///
/// A generator that is d-monotone yields a valid copula in every dimension
/// up to d. Ordering follows `Finite(1) < Finite(2) < … < Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Monotony {
    /// d-monotone for this d only.
    Finite(usize),
    /// Completely monotone: valid in every dimension.
    Infinite,
}

impl Monotony {
    /// Whether a copula of dimension `dimension` is valid.
    pub fn supports(self, dimension: usize) -> bool {
        self >= Monotony::Finite(dimension)
    }
}

impl fmt::Display for Monotony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Monotony::Finite(d) => write!(f, "{d}"),
            Monotony::Infinite => write!(f, "∞"),
        }
    }
}

/// Contract of an Archimedean generator.
///
/// Implementations provide φ, its inverse and derivatives. The dependence
/// measures have generic quadrature defaults; families override them with
/// closed forms where available.
pub trait Generator: fmt::Debug + Send + Sync {
    /// Family this generator belongs to.
    fn family(&self) -> GeneratorFamily;

    /// Dependence parameter θ (zero for the independence generator).
    fn parameter(&self) -> f64;

    /// φ(t) for t ≥ 0.
    fn phi(&self, t: f64) -> f64;

    /// φ⁻¹(u) for u ∈ [0, 1].
    fn phi_inv(&self, u: f64) -> f64;

    /// k-th derivative φ^(k)(t); `k = 0` returns φ(t).
    fn phi_derivative(&self, t: f64, k: usize) -> f64;

    /// Derivative of the inverse, `(φ⁻¹)'(u) = 1 / φ'(φ⁻¹(u))`.
    fn phi_inv_derivative(&self, u: f64) -> f64 {
        1.0 / self.phi_derivative(self.phi_inv(u), 1)
    }

    /// Largest d for which φ is d-monotone.
    fn max_monotony(&self) -> Monotony;

    /// Kendall's tau of the induced bivariate copula.
    fn tau(&self) -> f64 {
        measures::kendall_tau_by_quadrature(self)
    }

    /// Spearman's rho of the induced bivariate copula.
    fn rho(&self) -> f64 {
        measures::spearman_rho_by_quadrature(self)
    }

    /// Frailty distribution whose Laplace transform is φ, if one exists.
    fn frailty(&self) -> Option<Frailty> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotony_ordering() {
        assert!(Monotony::Finite(2) < Monotony::Finite(3));
        assert!(Monotony::Finite(1_000) < Monotony::Infinite);
        assert!(Monotony::Infinite.supports(50));
        assert!(Monotony::Finite(2).supports(2));
        assert!(!Monotony::Finite(2).supports(3));
    }

    #[test]
    fn test_monotony_display() {
        assert_eq!(Monotony::Finite(4).to_string(), "4");
        assert_eq!(Monotony::Infinite.to_string(), "∞");
    }
}
