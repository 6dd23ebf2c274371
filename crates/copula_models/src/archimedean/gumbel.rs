//! Gumbel generator φ(t) = exp(-t^{1/θ}).

use super::{Frailty, Generator, GeneratorFamily, Monotony};
use crate::error::CopulaError;
use crate::extreme_value::LogisticPickands;
use copula_core::math::series::{series_exp, series_pow, series_scale, series_variable};

/// Gumbel generator for θ ∈ (1, ∞).
///
/// Derivatives of every order are taken exactly from the Taylor expansion
/// of `exp(-(t + h)^{1/θ})`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GumbelGenerator {
    theta: f64,
}

impl GumbelGenerator {
    pub(crate) fn new(theta: f64) -> Result<Self, CopulaError> {
        if !(theta > 1.0 && theta.is_finite()) {
            return Err(CopulaError::invalid_parameter(
                "Gumbel",
                theta,
                "θ must be finite and > 1",
            ));
        }
        Ok(Self { theta })
    }

    /// Parameter θ.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Pickands dependence function of the Gumbel extreme-value copula.
    pub fn pickands(&self) -> LogisticPickands {
        LogisticPickands::from_validated(self.theta)
    }
}

pub(crate) fn kendall_tau(theta: f64) -> f64 {
    1.0 - 1.0 / theta
}

pub(crate) fn kendall_tau_inverse(tau: f64) -> f64 {
    1.0 / (1.0 - tau)
}

impl Generator for GumbelGenerator {
    fn family(&self) -> GeneratorFamily {
        GeneratorFamily::Gumbel
    }

    fn parameter(&self) -> f64 {
        self.theta
    }

    fn phi(&self, t: f64) -> f64 {
        (-t.powf(1.0 / self.theta)).exp()
    }

    fn phi_inv(&self, u: f64) -> f64 {
        (-u.ln()).powf(self.theta)
    }

    fn phi_derivative(&self, t: f64, k: usize) -> f64 {
        if k == 0 {
            return self.phi(t);
        }
        if t <= 0.0 {
            return if k % 2 == 0 { f64::INFINITY } else { f64::NEG_INFINITY };
        }
        let len = k + 1;
        let power = series_pow(&series_variable(t, k), 1.0 / self.theta, len);
        let coefficients = series_exp(&series_scale(&power, -1.0), len);
        let factorial: f64 = (1..=k).map(|j| j as f64).product();
        factorial * coefficients[k]
    }

    fn phi_inv_derivative(&self, u: f64) -> f64 {
        -self.theta * (-u.ln()).powf(self.theta - 1.0) / u
    }

    fn max_monotony(&self) -> Monotony {
        Monotony::Infinite
    }

    fn tau(&self) -> f64 {
        kendall_tau(self.theta)
    }

    fn frailty(&self) -> Option<Frailty> {
        Some(Frailty::PositiveStable {
            alpha: 1.0 / self.theta,
        })
    }
}
