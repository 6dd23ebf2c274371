//! Frank generator φ(t) = -ln(1 - (1 - e^{-θ}) e^{-t}) / θ.

use super::{Frailty, Generator, GeneratorFamily, Monotony};
use crate::error::CopulaError;
use copula_core::math::special::{debye, debye_taylor_coefficient, polylog_neg, MAX_BERNOULLI_INDEX};

/// Largest |θ| accepted; beyond it `e^{-θ}` leaves the double range.
pub const FRANK_MAX_ABS_THETA: f64 = 700.0;

/// Below this |θ| the dependence measures use their Taylor series.
const SERIES_THRESHOLD: f64 = 1.0;

/// Frank generator for θ ∈ ℝ \ {0}.
///
/// Negative θ gives negative dependence and a generator that is 2-monotone
/// only. Derivatives are polylogarithms of negative integer order:
/// `φ^(k)(t) = (-1)^k Li_{1-k}((1 - e^{-θ}) e^{-t}) / θ`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrankGenerator {
    theta: f64,
    /// 1 - e^{-θ}
    scale: f64,
}

impl FrankGenerator {
    pub(crate) fn new(theta: f64) -> Result<Self, CopulaError> {
        if theta.is_nan() || theta == 0.0 || theta.abs() > FRANK_MAX_ABS_THETA {
            return Err(CopulaError::invalid_parameter(
                "Frank",
                theta,
                format!("θ must be non-zero with |θ| ≤ {FRANK_MAX_ABS_THETA}"),
            ));
        }
        Ok(Self {
            theta,
            scale: -(-theta).exp_m1(),
        })
    }

    /// Parameter θ.
    pub fn theta(&self) -> f64 {
        self.theta
    }
}

/// Kendall's tau `1 + 4 (D₁(θ) - 1) / θ`.
pub(crate) fn kendall_tau(theta: f64) -> f64 {
    if theta == 0.0 {
        return 0.0;
    }
    if theta.abs() < SERIES_THRESHOLD {
        // D₁(θ) - 1 = Σ_{k≥1} c¹_k θ^k; the constant and θ/θ terms cancel the leading 1
        return 4.0 * series_in_theta(theta, |k| debye_taylor_coefficient(1, k));
    }
    1.0 + 4.0 * (debye(1, theta) - 1.0) / theta
}

/// Spearman's rho `1 + 12 (D₂(θ) - D₁(θ)) / θ`.
pub(crate) fn spearman_rho(theta: f64) -> f64 {
    if theta == 0.0 {
        return 0.0;
    }
    if theta.abs() < SERIES_THRESHOLD {
        return 12.0
            * series_in_theta(theta, |k| {
                debye_taylor_coefficient(2, k) - debye_taylor_coefficient(1, k)
            });
    }
    1.0 + 12.0 * (debye(2, theta) - debye(1, theta)) / theta
}

/// `Σ_{k≥2} c_k θ^{k-1}`, the part of `(D(θ) - 1 - c₁θ) / θ` that survives
/// the cancellation against the leading constant.
fn series_in_theta(theta: f64, coefficient: impl Fn(usize) -> f64) -> f64 {
    let mut power = theta;
    let mut sum = 0.0;
    for k in 2..=MAX_BERNOULLI_INDEX {
        sum += coefficient(k) * power;
        power *= theta;
    }
    sum
}

impl Generator for FrankGenerator {
    fn family(&self) -> GeneratorFamily {
        GeneratorFamily::Frank
    }

    fn parameter(&self) -> f64 {
        self.theta
    }

    fn phi(&self, t: f64) -> f64 {
        if self.theta > 0.0 {
            // 1 - (1 - e^{-θ}) e^{-t} = (1 - e^{-t}) + e^{-(θ + t)}
            -(-(-t).exp_m1() + (-(self.theta + t)).exp()).ln() / self.theta
        } else {
            -(-self.scale * (-t).exp()).ln_1p() / self.theta
        }
    }

    fn phi_inv(&self, u: f64) -> f64 {
        // q = (1 - e^{-θu}) / (1 - e^{-θ}); near u = 1 use 1 - q directly
        let q = (-self.theta * u).exp_m1() / (-self.theta).exp_m1();
        if q < 0.5 {
            return -q.ln();
        }
        let complement = (-self.theta * u).exp() * -(-self.theta * (1.0 - u)).exp_m1() / self.scale;
        -(-complement).ln_1p()
    }

    fn phi_derivative(&self, t: f64, k: usize) -> f64 {
        if k == 0 {
            return self.phi(t);
        }
        let value = polylog_neg(k - 1, self.scale * (-t).exp()) / self.theta;
        if k % 2 == 0 {
            value
        } else {
            -value
        }
    }

    fn phi_inv_derivative(&self, u: f64) -> f64 {
        -self.theta / (self.theta * u).exp_m1()
    }

    fn max_monotony(&self) -> Monotony {
        if self.theta > 0.0 {
            Monotony::Infinite
        } else {
            Monotony::Finite(2)
        }
    }

    fn tau(&self) -> f64 {
        kendall_tau(self.theta)
    }

    fn rho(&self) -> f64 {
        spearman_rho(self.theta)
    }

    fn frailty(&self) -> Option<Frailty> {
        (self.theta > 0.0).then_some(Frailty::Logarithmic { theta: self.theta })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archimedean::measures::{kendall_tau_by_quadrature, spearman_rho_by_quadrature};
    use approx::assert_relative_eq;

    #[test]
    fn test_inverse_round_trip() {
        for &theta in &[-8.0, -0.3, 0.4, 5.0, 40.0] {
            let g = FrankGenerator::new(theta).unwrap();
            for &u in &[0.01, 0.25, 0.5, 0.9, 0.999] {
                assert_relative_eq!(g.phi(g.phi_inv(u)), u, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_strong_dependence_near_origin() {
        let g = FrankGenerator::new(40.0).unwrap();
        for &u in &[0.5, 0.99, 0.999_999] {
            assert_relative_eq!(g.phi(g.phi_inv(u)), u, max_relative = 1e-13);
        }
        assert_relative_eq!(g.phi(0.0), 1.0, epsilon = 1e-15);
        assert!(g.phi(1e-300) <= 1.0 && g.phi(1e-12) < 1.0);
    }

    #[test]
    fn test_boundary_values() {
        let g = FrankGenerator::new(3.0).unwrap();
        assert_relative_eq!(g.phi(0.0), 1.0, epsilon = 1e-15);
        assert_relative_eq!(g.phi_inv(1.0), 0.0, epsilon = 1e-15);
        assert!(g.phi(60.0) < 1e-20);
    }

    #[test]
    fn test_first_derivative_finite_difference() {
        let g = FrankGenerator::new(-4.0).unwrap();
        let t = 0.6;
        let h = 1e-6;
        let fd = (g.phi(t + h) - g.phi(t - h)) / (2.0 * h);
        assert_relative_eq!(g.phi_derivative(t, 1), fd, max_relative = 1e-7);
    }

    #[test]
    fn test_inverse_derivative() {
        let g = FrankGenerator::new(2.5).unwrap();
        let u = 0.7;
        let via_phi = 1.0 / g.phi_derivative(g.phi_inv(u), 1);
        assert_relative_eq!(g.phi_inv_derivative(u), via_phi, max_relative = 1e-11);
    }

    #[test]
    fn test_max_monotony() {
        assert_eq!(FrankGenerator::new(2.0).unwrap().max_monotony(), Monotony::Infinite);
        assert_eq!(FrankGenerator::new(-2.0).unwrap().max_monotony(), Monotony::Finite(2));
    }

    #[test]
    fn test_measures_antisymmetric() {
        for &theta in &[0.3, 2.0, 10.0] {
            assert_relative_eq!(kendall_tau(-theta), -kendall_tau(theta), epsilon = 1e-13);
            assert_relative_eq!(spearman_rho(-theta), -spearman_rho(theta), epsilon = 1e-13);
        }
    }

    #[test]
    fn test_series_and_closed_form_agree_at_threshold() {
        let below = kendall_tau(SERIES_THRESHOLD * (1.0 - 1e-12));
        let above = 1.0 + 4.0 * (debye(1, SERIES_THRESHOLD) - 1.0) / SERIES_THRESHOLD;
        assert_relative_eq!(below, above, epsilon = 1e-12);

        let below = spearman_rho(SERIES_THRESHOLD * (1.0 - 1e-12));
        let above = 1.0
            + 12.0 * (debye(2, SERIES_THRESHOLD) - debye(1, SERIES_THRESHOLD)) / SERIES_THRESHOLD;
        assert_relative_eq!(below, above, epsilon = 1e-12);
    }

    #[test]
    fn test_small_theta_leading_terms() {
        // τ ≈ θ/9, ρ ≈ θ/6 as θ → 0
        assert_relative_eq!(kendall_tau(1e-6), 1e-6 / 9.0, max_relative = 1e-6);
        assert_relative_eq!(spearman_rho(1e-6), 1e-6 / 6.0, max_relative = 1e-6);
    }

    #[test]
    fn test_closed_forms_match_quadrature() {
        let g = FrankGenerator::new(5.0).unwrap();
        assert_relative_eq!(g.tau(), kendall_tau_by_quadrature(&g), epsilon = 1e-6);
        assert_relative_eq!(g.rho(), spearman_rho_by_quadrature(&g), epsilon = 1e-5);
    }
}
