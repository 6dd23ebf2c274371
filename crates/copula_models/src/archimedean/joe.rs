//! Joe generator φ(t) = 1 - (1 - e^{-t})^{1/θ}.

use super::{Frailty, Generator, GeneratorFamily, Monotony};
use crate::error::CopulaError;
use copula_core::math::series::series_pow;
use copula_core::math::special::digamma;
use std::f64::consts::PI;

/// Half-width of the window around θ = 2 where τ uses its expansion.
const TAU_EXPANSION_WINDOW: f64 = 1e-3;

/// ψ'(2) = π²/6 - 1
const TRIGAMMA_2: f64 = PI * PI / 6.0 - 1.0;
/// ψ''(2) = 2 - 2ζ(3)
const TETRAGAMMA_2: f64 = 2.0 - 2.0 * 1.202_056_903_159_594_3;
/// ψ'''(2) = π⁴/15 - 6
const PENTAGAMMA_2: f64 = PI * PI * PI * PI / 15.0 - 6.0;

/// Joe generator for θ ∈ (1, ∞).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JoeGenerator {
    theta: f64,
}

impl JoeGenerator {
    pub(crate) fn new(theta: f64) -> Result<Self, CopulaError> {
        if !(theta > 1.0 && theta.is_finite()) {
            return Err(CopulaError::invalid_parameter(
                "Joe",
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
}

/// Kendall's tau `1 + 2 (ψ(2) - ψ(2/θ + 1)) / (2 - θ)`.
///
/// The quotient is 0/0 at θ = 2, so a window around it uses the
/// third-order expansion in δ = 2/θ - 1.
pub(crate) fn kendall_tau(theta: f64) -> f64 {
    if theta == 1.0 {
        return 0.0;
    }
    if (theta - 2.0).abs() < TAU_EXPANSION_WINDOW {
        let delta = 2.0 / theta - 1.0;
        return 1.0
            - 2.0 / theta
                * (TRIGAMMA_2 + 0.5 * TETRAGAMMA_2 * delta + PENTAGAMMA_2 * delta * delta / 6.0);
    }
    1.0 + 2.0 * (digamma(2.0) - digamma(2.0 / theta + 1.0)) / (2.0 - theta)
}

impl Generator for JoeGenerator {
    fn family(&self) -> GeneratorFamily {
        GeneratorFamily::Joe
    }

    fn parameter(&self) -> f64 {
        self.theta
    }

    fn phi(&self, t: f64) -> f64 {
        // ln(1 - e^{-t}) through exp_m1 keeps φ below 1 for tiny t
        -((-(-t).exp_m1()).ln() / self.theta).exp_m1()
    }

    fn phi_inv(&self, u: f64) -> f64 {
        -(-(1.0 - u).powf(self.theta)).ln_1p()
    }

    fn phi_derivative(&self, t: f64, k: usize) -> f64 {
        if k == 0 {
            return self.phi(t);
        }
        if t <= 0.0 {
            return if k % 2 == 0 { f64::INFINITY } else { f64::NEG_INFINITY };
        }
        // 1 - e^{-(t+h)} = (1 - e^{-t}) - e^{-t} Σ_{j≥1} (-h)^j / j!
        let decay = (-t).exp();
        let mut base = Vec::with_capacity(k + 1);
        base.push(-(-t).exp_m1());
        let mut factorial = 1.0;
        for j in 1..=k {
            factorial *= j as f64;
            let sign = if j % 2 == 0 { -1.0 } else { 1.0 };
            base.push(sign * decay / factorial);
        }
        let power = series_pow(&base, 1.0 / self.theta, k + 1);
        -factorial * power[k]
    }

    fn phi_inv_derivative(&self, u: f64) -> f64 {
        let w = (1.0 - u).powf(self.theta);
        -self.theta * (1.0 - u).powf(self.theta - 1.0) / (1.0 - w)
    }

    fn max_monotony(&self) -> Monotony {
        Monotony::Infinite
    }

    fn tau(&self) -> f64 {
        kendall_tau(self.theta)
    }

    fn frailty(&self) -> Option<Frailty> {
        Some(Frailty::Sibuya {
            alpha: 1.0 / self.theta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archimedean::measures::kendall_tau_by_quadrature;
    use approx::assert_relative_eq;

    #[test]
    fn test_inverse_round_trip() {
        for &theta in &[1.2, 2.0, 6.0] {
            let g = JoeGenerator::new(theta).unwrap();
            for &u in &[0.02, 0.4, 0.75, 0.99] {
                assert_relative_eq!(g.phi(g.phi_inv(u)), u, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_phi_stays_below_one_for_tiny_arguments() {
        // φ(t) ≈ 1 - t^{1/θ} as t → 0
        let g = JoeGenerator::new(5.0).unwrap();
        for &t in &[1e-10_f64, 1e-17, 1e-40] {
            let expected = 1.0 - t.powf(0.2);
            assert!(g.phi(t) < 1.0);
            assert_relative_eq!(g.phi(t), expected, max_relative = 1e-12);
        }
        for &u in &[0.9964, 0.999_999] {
            assert_relative_eq!(g.phi(g.phi_inv(u)), u, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_first_derivative_closed_form() {
        // φ'(t) = -(1/θ)(1 - e^{-t})^{1/θ - 1} e^{-t}
        let theta = 3.0;
        let g = JoeGenerator::new(theta).unwrap();
        let t: f64 = 0.8;
        let expected = -(1.0 / theta) * (1.0 - (-t).exp()).powf(1.0 / theta - 1.0) * (-t).exp();
        assert_relative_eq!(g.phi_derivative(t, 1), expected, max_relative = 1e-13);
    }

    #[test]
    fn test_higher_derivative_finite_difference() {
        let g = JoeGenerator::new(2.5).unwrap();
        let t = 1.1;
        let h = 1e-4;
        let fd = (g.phi_derivative(t + h, 3) - g.phi_derivative(t - h, 3)) / (2.0 * h);
        assert_relative_eq!(g.phi_derivative(t, 4), fd, max_relative = 1e-6);
    }

    #[test]
    fn test_derivative_signs_alternate() {
        let g = JoeGenerator::new(4.0).unwrap();
        for k in 1..7 {
            let d = g.phi_derivative(0.5, k);
            assert!(if k % 2 == 0 { d > 0.0 } else { d < 0.0 }, "k = {k}, d = {d}");
        }
    }

    #[test]
    fn test_inverse_derivative() {
        let g = JoeGenerator::new(1.8).unwrap();
        let u = 0.55;
        let via_phi = 1.0 / g.phi_derivative(g.phi_inv(u), 1);
        assert_relative_eq!(g.phi_inv_derivative(u), via_phi, max_relative = 1e-12);
    }

    #[test]
    fn test_tau_continuous_across_theta_two() {
        let inside = kendall_tau(2.0);
        let left = kendall_tau(2.0 - 1.5 * TAU_EXPANSION_WINDOW);
        let right = kendall_tau(2.0 + 1.5 * TAU_EXPANSION_WINDOW);
        assert!(left < inside && inside < right);
        // 1 - 2ψ'(2)/2 = 2 - π²/6
        assert_relative_eq!(inside, 2.0 - PI * PI / 6.0, epsilon = 1e-14);
        assert_relative_eq!(
            kendall_tau(2.0 + 0.999 * TAU_EXPANSION_WINDOW),
            kendall_tau(2.0 + 1.001 * TAU_EXPANSION_WINDOW),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_tau_matches_quadrature() {
        for &theta in &[1.5, 3.0, 8.0] {
            let g = JoeGenerator::new(theta).unwrap();
            assert_relative_eq!(g.tau(), kendall_tau_by_quadrature(&g), epsilon = 1e-6);
        }
    }
}
