//! Debye functions and Bernoulli numbers.

use crate::math::quadrature::GaussLegendre;

/// Non-zero Bernoulli numbers `B_0, B_1, B_2, B_4, …, B_20` (B_1 = -1/2).
const BERNOULLI_EVEN: [f64; 11] = [
    1.0,
    1.0 / 6.0,
    -1.0 / 30.0,
    1.0 / 42.0,
    -1.0 / 30.0,
    5.0 / 66.0,
    -691.0 / 2730.0,
    7.0 / 6.0,
    -3617.0 / 510.0,
    43867.0 / 798.0,
    -174611.0 / 330.0,
];

/// Highest index supported by [`bernoulli`].
pub const MAX_BERNOULLI_INDEX: usize = 20;

/// Below this `|x|` the Debye function is summed from its Bernoulli series.
const SERIES_RADIUS: f64 = 1.0;

/// The integrand is negligible past this point for every supported order.
const INTEGRATION_CUTOFF: f64 = 150.0;

/// Bernoulli number `B_k` for `k ≤ 20` (convention `B_1 = -1/2`), NaN above.
pub fn bernoulli(k: usize) -> f64 {
    match k {
        1 => -0.5,
        k if k > MAX_BERNOULLI_INDEX => f64::NAN,
        k if k % 2 == 1 => 0.0,
        k => BERNOULLI_EVEN[k / 2],
    }
}

/// Coefficient of `x^k` in the Taylor expansion of `D_n(x)` around zero:
/// `n B_k / (k! (k + n))`.
pub fn debye_taylor_coefficient(n: u32, k: usize) -> f64 {
    let factorial: f64 = (1..=k).map(|j| j as f64).product();
    n as f64 * bernoulli(k) / (factorial * (k as f64 + n as f64))
}

/// Debye function `D_n(x) = n / x^n ∫_0^x t^n / (e^t - 1) dt`, `n ≥ 1`.
///
/// `D_n(0) = 1`. Negative arguments use `D_n(-x) = D_n(x) + n x / (n + 1)`.
///
/// ```
/// use copula_core::math::special::debye;
///
/// assert_eq!(debye(1, 0.0), 1.0);
/// // D_1(x) → π²/(6x) for large x
/// let x = 100.0;
/// assert!((debye(1, x) - std::f64::consts::PI.powi(2) / (6.0 * x)).abs() < 1e-12);
/// ```
pub fn debye(n: u32, x: f64) -> f64 {
    if x == 0.0 {
        return 1.0;
    }
    if x < 0.0 {
        let nf = n as f64;
        return debye(n, -x) - nf * x / (nf + 1.0);
    }
    if x < SERIES_RADIUS {
        return (0..=MAX_BERNOULLI_INDEX)
            .rev()
            .fold(0.0, |acc, k| acc * x + debye_taylor_coefficient(n, k));
    }

    let upper = x.min(INTEGRATION_CUTOFF);
    let panels = (upper / 2.0).ceil() as usize;
    let integral = GaussLegendre::standard().integrate_composite(
        |t| t.powi(n as i32 - 1) * t / t.exp_m1(),
        0.0,
        upper,
        panels,
    );
    n as f64 * integral / x.powi(n as i32)
}
