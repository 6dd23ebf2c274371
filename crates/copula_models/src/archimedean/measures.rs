//! Generic dependence measures of an Archimedean copula by quadrature.
//!
//! These hold for any generator and back the default
//! [`Generator::tau`](super::Generator::tau) and
//! [`Generator::rho`](super::Generator::rho) implementations. Families with
//! closed forms override them and use these as a cross-check.

use super::Generator;
use copula_core::math::quadrature::GaussLegendre;

/// Panels of the composite rule for Kendall's tau.
const TAU_PANELS: usize = 16;
/// Panels in u of the triangle rule for Spearman's rho.
const RHO_OUTER_PANELS: usize = 8;
/// Panels in v ∈ [0, u] of the triangle rule for Spearman's rho.
const RHO_INNER_PANELS: usize = 16;

/// Kendall's tau `1 + 4 ∫₀¹ φ⁻¹(u) / (φ⁻¹)'(u) du`.
///
/// Integrated in `x = √u`; the integrand typically behaves like `u ln u`
/// at the origin, which the substitution smooths out.
pub fn kendall_tau_by_quadrature<G: Generator + ?Sized>(generator: &G) -> f64 {
    let integral = GaussLegendre::standard().integrate_composite(
        |x| {
            let u = x * x;
            let ratio = generator.phi_inv(u) / generator.phi_inv_derivative(u);
            if ratio.is_finite() {
                2.0 * x * ratio
            } else {
                0.0
            }
        },
        0.0,
        1.0,
        TAU_PANELS,
    );
    1.0 + 4.0 * integral
}

/// Spearman's rho `12 ∫∫ C(u, v) du dv - 3`.
///
/// C is exchangeable, so the square is folded onto the triangle `v ≤ u`.
/// The kink of C along the diagonal then sits on the boundary of the inner
/// integral instead of inside a panel.
pub fn spearman_rho_by_quadrature<G: Generator + ?Sized>(generator: &G) -> f64 {
    let rule = GaussLegendre::standard();
    let lower_triangle = rule.integrate_composite(
        |u| {
            let s = generator.phi_inv(u);
            rule.integrate_composite(|v| generator.phi(s + generator.phi_inv(v)), 0.0, u, RHO_INNER_PANELS)
        },
        0.0,
        1.0,
        RHO_OUTER_PANELS,
    );
    24.0 * lower_triangle - 3.0
}
