//! Closed-form bivariate copulas and the Fréchet–Hoeffding bounds.

use crate::error::CopulaError;

/// Plackett copula with parameter θ ∈ (0, ∞) \ {1}.
///
/// θ is the reciprocal of the cross-product odds ratio ψ = 1/θ, so θ → 0
/// approaches the upper bound M and θ → ∞ the lower bound W.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlackettCopula {
    theta: f64,
}

impl PlackettCopula {
    /// Parameter θ.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Cross-product odds ratio ψ = 1/θ.
    pub fn odds_ratio(&self) -> f64 {
        1.0 / self.theta
    }

    fn cdf(&self, u: f64, v: f64) -> f64 {
        let psi = self.odds_ratio();
        let eta = psi - 1.0;
        let a = 1.0 + eta * (u + v);
        let discriminant = a * a - 4.0 * u * v * psi * eta;
        (a - discriminant.max(0.0).sqrt()) / (2.0 * eta)
    }

    fn spearman_rho(&self) -> f64 {
        let psi = self.odds_ratio();
        (psi + 1.0) / (psi - 1.0) - 2.0 * psi * psi.ln() / ((psi - 1.0) * (psi - 1.0))
    }
}

/// Bivariate copula with a closed-form CDF.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BivariateCopula {
    /// Π(u, v) = uv
    Independence,
    /// Upper Fréchet bound M(u, v) = min(u, v)
    Comonotone,
    /// Lower Fréchet bound W(u, v) = max(u + v - 1, 0)
    Countermonotone,
    /// Plackett copula
    Plackett(PlackettCopula),
}

impl BivariateCopula {
    /// Plackett copula, normalised at its degenerate parameters.
    ///
    /// **θ is the inverse odds ratio, θ = 1/ψ.** This reverses the usual
    /// Plackett parameterisation in ψ: here θ < 1 means positive dependence
    /// and θ > 1 negative dependence.
    ///
    /// θ = 1 gives independence, θ = 0 the upper bound M and θ = ∞ the
    /// lower bound W.
    ///
    /// # Errors
    ///
    /// [`CopulaError::InvalidParameter`] if θ is negative or NaN.
    ///
    /// # Example
    ///
    /// ```
    /// use copula_models::bivariate::BivariateCopula;
    ///
    /// assert_eq!(BivariateCopula::plackett(1.0).unwrap(), BivariateCopula::Independence);
    /// assert_eq!(BivariateCopula::plackett(0.0).unwrap(), BivariateCopula::Comonotone);
    /// assert_eq!(
    ///     BivariateCopula::plackett(f64::INFINITY).unwrap(),
    ///     BivariateCopula::Countermonotone
    /// );
    /// ```
    pub fn plackett(theta: f64) -> Result<Self, CopulaError> {
        if theta.is_nan() || theta < 0.0 {
            return Err(CopulaError::invalid_parameter(
                "Plackett",
                theta,
                "θ must be ≥ 0",
            ));
        }
        Ok(if theta == 1.0 {
            BivariateCopula::Independence
        } else if theta == 0.0 {
            BivariateCopula::Comonotone
        } else if theta.is_infinite() {
            BivariateCopula::Countermonotone
        } else {
            BivariateCopula::Plackett(PlackettCopula { theta })
        })
    }

    /// C(u, v); arguments are clamped to [0, 1].
    pub fn cdf(&self, u: f64, v: f64) -> f64 {
        let u = u.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);
        match self {
            BivariateCopula::Independence => u * v,
            BivariateCopula::Comonotone => u.min(v),
            BivariateCopula::Countermonotone => (u + v - 1.0).max(0.0),
            BivariateCopula::Plackett(p) => p.cdf(u, v),
        }
    }

    /// Spearman's rho.
    pub fn spearman_rho(&self) -> f64 {
        match self {
            BivariateCopula::Independence => 0.0,
            BivariateCopula::Comonotone => 1.0,
            BivariateCopula::Countermonotone => -1.0,
            BivariateCopula::Plackett(p) => p.spearman_rho(),
        }
    }
}
