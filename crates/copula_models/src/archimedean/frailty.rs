//! Frailty (mixing) distributions.
//!
//! A generator φ that is the Laplace transform of a positive random variable
//! M admits the Marshall–Olkin construction `Uᵢ = φ(Eᵢ / M)` with
//! independent standard exponentials Eᵢ. Drawing from these laws lives in
//! the sampling crate; this enum only names the law and its parameters.

/// Law of the frailty variable M with `E[exp(-t M)] = φ(t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frailty {
    /// Point mass at `value` (independence for `value = 1`).
    Dirac {
        /// Location of the point mass
        value: f64,
    },
    /// Gamma(shape, scale) law (Clayton, θ > 0).
    Gamma {
        /// Shape parameter 1/θ
        shape: f64,
        /// Scale parameter θ
        scale: f64,
    },
    /// One-sided α-stable law with Laplace transform `exp(-t^α)` (Gumbel).
    PositiveStable {
        /// Stability index 1/θ ∈ (0, 1]
        alpha: f64,
    },
    /// Logarithmic series law on {1, 2, …} with `p = 1 - e^{-θ}` (Frank, θ > 0).
    Logarithmic {
        /// Frank parameter θ > 0
        theta: f64,
    },
    /// Geometric law on {1, 2, …} with success probability 1 - θ (AMH, 0 < θ < 1).
    Geometric {
        /// AMH parameter θ ∈ (0, 1)
        theta: f64,
    },
    /// Sibuya law on {1, 2, …} with index α (Joe).
    Sibuya {
        /// Index 1/θ ∈ (0, 1]
        alpha: f64,
    },
}

impl Frailty {
    /// Laplace transform `E[exp(-t M)]`, which equals the generator φ(t).
    pub fn laplace_transform(&self, t: f64) -> f64 {
        match *self {
            Frailty::Dirac { value } => (-t * value).exp(),
            Frailty::Gamma { shape, scale } => (-shape * (scale * t).ln_1p()).exp(),
            Frailty::PositiveStable { alpha } => (-t.powf(alpha)).exp(),
            Frailty::Logarithmic { theta } => {
                let p = -(-theta).exp_m1();
                -(-p * (-t).exp()).ln_1p() / theta
            }
            Frailty::Geometric { theta } => (1.0 - theta) / (t.exp() - theta),
            Frailty::Sibuya { alpha } => -(alpha * (-(-t).exp()).ln_1p()).exp_m1(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_laplace_transform_at_zero_is_one() {
        let laws = [
            Frailty::Dirac { value: 1.0 },
            Frailty::Gamma { shape: 0.5, scale: 2.0 },
            Frailty::PositiveStable { alpha: 0.5 },
            Frailty::Logarithmic { theta: 3.0 },
            Frailty::Geometric { theta: 0.4 },
            Frailty::Sibuya { alpha: 0.5 },
        ];
        for law in laws {
            assert_relative_eq!(law.laplace_transform(0.0), 1.0, epsilon = 1e-14);
            assert!(law.laplace_transform(1.0) < 1.0);
        }
    }

    #[test]
    fn test_dirac_is_exponential() {
        let law = Frailty::Dirac { value: 1.0 };
        assert_relative_eq!(law.laplace_transform(2.0), (-2.0f64).exp(), epsilon = 1e-15);
    }
}
