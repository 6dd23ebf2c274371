//! Ali–Mikhail–Haq generator φ(t) = (1 - θ) / (e^t - θ).

use super::critical_values::amh_critical_values;
use super::{Frailty, Generator, GeneratorFamily, Monotony};
use crate::error::CopulaError;
use copula_core::math::special::{dilog, polylog_neg};
use std::f64::consts::PI;

/// Below this |θ| Kendall's tau uses its power series.
const TAU_SERIES_THRESHOLD: f64 = 0.5;
/// Terms of the tau series; |θ|^n / n³ is below 1e-19 at the threshold.
const TAU_SERIES_TERMS: usize = 60;

/// `(|θ| bound, terms)` for the Spearman's rho series; above the last bound
/// the closed form is used.
const RHO_SERIES_ORDERS: [(f64, usize); 4] = [(1e-4, 4), (2e-3, 6), (7e-3, 8), (0.016, 10)];

/// Ali–Mikhail–Haq generator for θ ∈ [-1, 1) \ {0}.
///
/// For θ < 0 the maximal monotonicity is finite and found from the
/// critical values of the negative-order polylogarithm.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmhGenerator {
    theta: f64,
}

impl AmhGenerator {
    pub(crate) fn new(theta: f64) -> Result<Self, CopulaError> {
        if theta.is_nan() || !(-1.0..1.0).contains(&theta) || theta == 0.0 {
            return Err(CopulaError::invalid_parameter(
                "AMH",
                theta,
                "θ must be non-zero and in [-1, 1)",
            ));
        }
        Ok(Self { theta })
    }

    /// Parameter θ.
    pub fn theta(&self) -> f64 {
        self.theta
    }
}

/// Kendall's tau `1 - 2 (θ + (1 - θ)² ln(1 - θ)) / (3θ²)`.
///
/// Near zero the closed form cancels catastrophically, so the series
/// `(4/3) Σ_{j≥1} θ^j / (j (j+1) (j+2))` is summed instead.
pub(crate) fn kendall_tau(theta: f64) -> f64 {
    if theta == 1.0 {
        return 1.0 / 3.0;
    }
    if theta.abs() < TAU_SERIES_THRESHOLD {
        let mut power = 1.0;
        let mut sum = 0.0;
        for j in 1..=TAU_SERIES_TERMS {
            power *= theta;
            let jf = j as f64;
            sum += power / (jf * (jf + 1.0) * (jf + 2.0));
        }
        return 4.0 / 3.0 * sum;
    }
    let one_minus = 1.0 - theta;
    1.0 - 2.0 * (theta + one_minus * one_minus * (-theta).ln_1p()) / (3.0 * theta * theta)
}

/// Spearman's rho.
///
/// Closed form
/// `12 (1 + θ) Li₂(θ) / θ² - 24 (1 - θ) ln(1 - θ) / θ² - 3 (θ + 12) / θ`,
/// replaced near zero by the truncated series `Σ 12 θ^j / ((j+1)² (j+2)²)`
/// with the fewest terms that keep double precision.
pub(crate) fn spearman_rho(theta: f64) -> f64 {
    if theta == 1.0 {
        return 4.0 * PI * PI - 39.0;
    }
    let magnitude = theta.abs();
    if let Some(&(_, terms)) = RHO_SERIES_ORDERS.iter().find(|(bound, _)| magnitude < *bound) {
        let mut power = 1.0;
        let mut sum = 0.0;
        for j in 1..=terms {
            power *= theta;
            let a = (j + 1) as f64;
            let b = (j + 2) as f64;
            sum += 12.0 * power / (a * a * b * b);
        }
        return sum;
    }
    let theta2 = theta * theta;
    12.0 * (1.0 + theta) * dilog(theta) / theta2
        - 24.0 * (1.0 - theta) * (-theta).ln_1p() / theta2
        - 3.0 * (theta + 12.0) / theta
}

impl Generator for AmhGenerator {
    fn family(&self) -> GeneratorFamily {
        GeneratorFamily::Amh
    }

    fn parameter(&self) -> f64 {
        self.theta
    }

    fn phi(&self, t: f64) -> f64 {
        (1.0 - self.theta) / (t.exp() - self.theta)
    }

    fn phi_inv(&self, u: f64) -> f64 {
        ((1.0 - self.theta) * (1.0 / u - 1.0)).ln_1p()
    }

    fn phi_derivative(&self, t: f64, k: usize) -> f64 {
        if k == 0 {
            return self.phi(t);
        }
        let value = (1.0 - self.theta) / self.theta * polylog_neg(k, self.theta * (-t).exp());
        if k % 2 == 0 {
            value
        } else {
            -value
        }
    }

    fn phi_inv_derivative(&self, u: f64) -> f64 {
        -(1.0 - self.theta) / (u * (self.theta * u + 1.0 - self.theta))
    }

    fn max_monotony(&self) -> Monotony {
        if self.theta >= 0.0 {
            Monotony::Infinite
        } else {
            amh_critical_values().max_monotony(self.theta)
        }
    }

    fn tau(&self) -> f64 {
        kendall_tau(self.theta)
    }

    fn rho(&self) -> f64 {
        spearman_rho(self.theta)
    }

    fn frailty(&self) -> Option<Frailty> {
        (self.theta > 0.0).then_some(Frailty::Geometric { theta: self.theta })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archimedean::measures::{kendall_tau_by_quadrature, spearman_rho_by_quadrature};
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_out_of_range() {
        assert!(AmhGenerator::new(1.0).is_err());
        assert!(AmhGenerator::new(-1.01).is_err());
        assert!(AmhGenerator::new(0.0).is_err());
        assert!(AmhGenerator::new(-1.0).is_ok());
    }

    #[test]
    fn test_inverse_round_trip() {
        for &theta in &[-1.0, -0.4, 0.3, 0.95] {
            let g = AmhGenerator::new(theta).unwrap();
            for &u in &[0.03, 0.5, 0.97] {
                assert_relative_eq!(g.phi(g.phi_inv(u)), u, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_first_derivative_closed_form() {
        let theta = 0.6;
        let g = AmhGenerator::new(theta).unwrap();
        let t: f64 = 0.9;
        let expected = -(1.0 - theta) * t.exp() / (t.exp() - theta).powi(2);
        assert_relative_eq!(g.phi_derivative(t, 1), expected, max_relative = 1e-13);
    }

    #[test]
    fn test_inverse_derivative() {
        let g = AmhGenerator::new(-0.7).unwrap();
        let u = 0.3;
        let via_phi = 1.0 / g.phi_derivative(g.phi_inv(u), 1);
        assert_relative_eq!(g.phi_inv_derivative(u), via_phi, max_relative = 1e-12);
    }

    #[test]
    fn test_tau_limits() {
        assert_relative_eq!(kendall_tau(1.0), 1.0 / 3.0);
        assert_relative_eq!(kendall_tau(0.999_999), 1.0 / 3.0, epsilon = 1e-4);
        assert_relative_eq!(kendall_tau(-1.0), 5.0 / 3.0 - 8.0 * 2f64.ln() / 3.0, epsilon = 1e-14);
    }

    #[test]
    fn test_tau_series_matches_closed_form() {
        let theta: f64 = TAU_SERIES_THRESHOLD;
        let one_minus = 1.0 - theta;
        let closed =
            1.0 - 2.0 * (theta + one_minus * one_minus * (-theta).ln_1p()) / (3.0 * theta * theta);
        assert_relative_eq!(kendall_tau(theta * (1.0 - 1e-12)), closed, epsilon = 1e-12);
    }

    #[test]
    fn test_rho_series_continuous_at_thresholds() {
        for &(bound, _) in &RHO_SERIES_ORDERS {
            let below = spearman_rho(bound * (1.0 - 1e-9));
            let above = spearman_rho(bound * (1.0 + 1e-9));
            assert_relative_eq!(below, above, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_rho_at_one() {
        assert_relative_eq!(spearman_rho(1.0), 4.0 * PI * PI - 39.0, epsilon = 1e-14);
        assert_relative_eq!(spearman_rho(0.999_999), spearman_rho(1.0), epsilon = 1e-4);
    }

    #[test]
    fn test_closed_forms_match_quadrature() {
        for &theta in &[-0.8, 0.5] {
            let g = AmhGenerator::new(theta).unwrap();
            assert_relative_eq!(g.tau(), kendall_tau_by_quadrature(&g), epsilon = 1e-6);
            assert_relative_eq!(g.rho(), spearman_rho_by_quadrature(&g), epsilon = 1e-5);
        }
    }

    #[test]
    fn test_max_monotony() {
        assert_eq!(AmhGenerator::new(0.5).unwrap().max_monotony(), Monotony::Infinite);
        assert_eq!(AmhGenerator::new(-1.0).unwrap().max_monotony(), Monotony::Finite(2));
        // c₃ = √3 - 2 ≈ -0.268, c₄ = 2√6 - 5 ≈ -0.101
        assert_eq!(AmhGenerator::new(-0.2).unwrap().max_monotony(), Monotony::Finite(3));
        assert_eq!(AmhGenerator::new(-0.05).unwrap().max_monotony(), Monotony::Finite(4));
    }
}
