//! Clayton generator φ(t) = (1 + θt)₊^{-1/θ}.

use super::{Frailty, Generator, GeneratorFamily, Monotony};
use crate::error::CopulaError;

/// Clayton generator for θ ∈ [-1, ∞) \ {0}.
///
/// For θ < 0 the generator has compact support `[0, -1/θ]` and is only
/// `floor(1 - 1/θ)`-monotone; θ = -1 reproduces the lower Fréchet bound in
/// two dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClaytonGenerator {
    theta: f64,
}

impl ClaytonGenerator {
    /// Validate θ for the non-degenerate Clayton generator.
    pub(crate) fn new(theta: f64) -> Result<Self, CopulaError> {
        if theta.is_nan() || theta < -1.0 || theta == 0.0 || theta.is_infinite() {
            return Err(CopulaError::invalid_parameter(
                "Clayton",
                theta,
                "θ must be finite, non-zero and ≥ -1",
            ));
        }
        Ok(Self { theta })
    }

    /// Parameter θ.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    fn base(&self, t: f64) -> f64 {
        1.0 + self.theta * t
    }
}

/// Kendall's tau θ / (θ + 2).
pub(crate) fn kendall_tau(theta: f64) -> f64 {
    theta / (theta + 2.0)
}

/// Closed-form inverse of [`kendall_tau`].
pub(crate) fn kendall_tau_inverse(tau: f64) -> f64 {
    2.0 * tau / (1.0 - tau)
}

impl Generator for ClaytonGenerator {
    fn family(&self) -> GeneratorFamily {
        GeneratorFamily::Clayton
    }

    fn parameter(&self) -> f64 {
        self.theta
    }

    fn phi(&self, t: f64) -> f64 {
        let base = self.base(t);
        if base <= 0.0 {
            return 0.0;
        }
        (-base.ln() / self.theta).exp()
    }

    fn phi_inv(&self, u: f64) -> f64 {
        (-self.theta * u.ln()).exp_m1() / self.theta
    }

    fn phi_derivative(&self, t: f64, k: usize) -> f64 {
        if k == 0 {
            return self.phi(t);
        }
        let base = self.base(t);
        if base <= 0.0 {
            return 0.0;
        }
        // θ^k ∏_{j<k} (-1/θ - j) = ∏_{j<k} (-1 - jθ)
        let coefficient: f64 = (0..k).map(|j| -1.0 - j as f64 * self.theta).product();
        if coefficient == 0.0 {
            return 0.0;
        }
        coefficient * (base.ln() * (-1.0 / self.theta - k as f64)).exp()
    }

    fn phi_inv_derivative(&self, u: f64) -> f64 {
        -(-(self.theta + 1.0) * u.ln()).exp()
    }

    fn max_monotony(&self) -> Monotony {
        if self.theta >= 0.0 {
            Monotony::Infinite
        } else {
            Monotony::Finite((1.0 - 1.0 / self.theta).floor() as usize)
        }
    }

    fn tau(&self) -> f64 {
        kendall_tau(self.theta)
    }

    fn frailty(&self) -> Option<Frailty> {
        (self.theta > 0.0).then(|| Frailty::Gamma {
            shape: 1.0 / self.theta,
            scale: self.theta,
        })
    }
}
