//! Pickands dependence functions.

use crate::error::CopulaError;

/// Pickands dependence function with its first two derivatives.
pub trait PickandsFunction: Send + Sync {
    /// A(t)
    fn value(&self, t: f64) -> f64;

    /// A'(t)
    fn first_derivative(&self, t: f64) -> f64;

    /// A''(t)
    fn second_derivative(&self, t: f64) -> f64;
}

/// Logistic (Gumbel) Pickands function `A(t) = (t^θ + (1 - t)^θ)^{1/θ}`.
///
/// θ = 1 gives independence (A ≡ 1); θ → ∞ approaches comonotonicity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogisticPickands {
    theta: f64,
}

impl LogisticPickands {
    /// Logistic Pickands function for θ ∈ [1, ∞).
    ///
    /// # Errors
    ///
    /// [`CopulaError::InvalidParameter`] unless θ is finite and ≥ 1.
    pub fn new(theta: f64) -> Result<Self, CopulaError> {
        if !(theta >= 1.0 && theta.is_finite()) {
            return Err(CopulaError::invalid_parameter(
                "Logistic",
                theta,
                "θ must be finite and ≥ 1",
            ));
        }
        Ok(Self { theta })
    }

    pub(crate) fn from_validated(theta: f64) -> Self {
        Self { theta }
    }

    /// Parameter θ.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    fn sum(&self, t: f64) -> f64 {
        t.powf(self.theta) + (1.0 - t).powf(self.theta)
    }
}

impl PickandsFunction for LogisticPickands {
    fn value(&self, t: f64) -> f64 {
        self.sum(t).powf(1.0 / self.theta)
    }

    fn first_derivative(&self, t: f64) -> f64 {
        let theta = self.theta;
        self.sum(t).powf(1.0 / theta - 1.0) * (t.powf(theta - 1.0) - (1.0 - t).powf(theta - 1.0))
    }

    fn second_derivative(&self, t: f64) -> f64 {
        let theta = self.theta;
        if theta == 1.0 {
            return 0.0;
        }
        (theta - 1.0) * self.sum(t).powf(1.0 / theta - 2.0) * (t * (1.0 - t)).powf(theta - 2.0)
    }
}

/// Extreme-value copula CDF `exp(ln(uv) · A(ln v / ln(uv)))`.
pub fn extreme_value_cdf<P: PickandsFunction + ?Sized>(pickands: &P, u: f64, v: f64) -> f64 {
    let u = u.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);
    if u == 0.0 || v == 0.0 {
        return 0.0;
    }
    let log_uv = (u * v).ln();
    if log_uv == 0.0 {
        return 1.0;
    }
    (log_uv * pickands.value(v.ln() / log_uv)).exp()
}
