//! Polylogarithm of integer order.

use std::f64::consts::PI;

const PI2_OVER_6: f64 = PI * PI / 6.0;
const SERIES_MAX_TERMS: usize = 200;

/// Row `n` of the Eulerian numbers `A(n, k)`, `k = 0..n`.
///
/// `A(0, 0) = 1`; the row for `n ≥ 1` has `n` non-zero entries.
///
/// ```
/// use copula_core::math::special::eulerian_row;
///
/// assert_eq!(eulerian_row(4), vec![1.0, 11.0, 11.0, 1.0]);
/// ```
pub fn eulerian_row(n: usize) -> Vec<f64> {
    let mut row = vec![1.0];
    for m in 1..=n {
        let mut next = vec![0.0; m];
        for (k, slot) in next.iter_mut().enumerate() {
            let stay = if k < row.len() { (k as f64 + 1.0) * row[k] } else { 0.0 };
            let shift = if k >= 1 && k - 1 < row.len() {
                (m - k) as f64 * row[k - 1]
            } else {
                0.0
            };
            *slot = stay + shift;
        }
        row = next;
    }
    row
}

/// `Li_{-n}(x)` for `n ≥ 0` and `x ≠ 1`.
///
/// Uses the Eulerian-number closed form
/// `Li_{-n}(x) = Σ_k A(n, k) x^{k+1} / (1 - x)^{n+1}`, evaluated as
/// `Σ_k A(n, k) y^{k+1} w^{n-k}` with `y = x / (1 - x)` and `w = 1 / (1 - x)`
/// so that large negative arguments do not overflow.
///
/// ```
/// use copula_core::math::special::polylog_neg;
///
/// // Li_0(x) = x / (1 - x), Li_{-1}(x) = x / (1 - x)^2
/// assert!((polylog_neg(0, 0.5) - 1.0).abs() < 1e-15);
/// assert!((polylog_neg(1, 0.5) - 2.0).abs() < 1e-15);
/// ```
pub fn polylog_neg(n: usize, x: f64) -> f64 {
    let w = 1.0 / (1.0 - x);
    let y = x * w;
    if n == 0 {
        return y;
    }
    eulerian_row(n)
        .iter()
        .enumerate()
        .map(|(k, &a)| a * y.powi(k as i32 + 1) * w.powi((n - k) as i32))
        .sum()
}

/// Dilogarithm `Li_2(x)` for real `x ≤ 1`; NaN above 1.
///
/// Power series on `|x| ≤ 1/2`, reflection on `(1/2, 1)`, Landen's identity
/// on `[-1, -1/2)` and inversion below `-1`.
pub fn dilog(x: f64) -> f64 {
    if x.is_nan() || x > 1.0 {
        return f64::NAN;
    }
    if x == 1.0 {
        return PI2_OVER_6;
    }
    if x < -1.0 {
        let l = (-x).ln();
        return -PI2_OVER_6 - 0.5 * l * l - dilog(1.0 / x);
    }
    if x < -0.5 {
        let l = (-x).ln_1p();
        return -dilog(x / (x - 1.0)) - 0.5 * l * l;
    }
    if x <= 0.5 {
        return dilog_series(x);
    }
    PI2_OVER_6 - x.ln() * (-x).ln_1p() - dilog_series(1.0 - x)
}

fn dilog_series(x: f64) -> f64 {
    let mut sum = 0.0;
    let mut power = x;
    for k in 1..=SERIES_MAX_TERMS {
        let term = power / (k * k) as f64;
        sum += term;
        if term.abs() <= f64::EPSILON * 1e-2 * sum.abs() {
            break;
        }
        power *= x;
    }
    sum
}

/// Polylogarithm `Li_s(x)` for integer order `s ≤ 2` and real `x ≤ 1`.
///
/// Negative and zero orders go through [`polylog_neg`], `s = 1` is
/// `-ln(1 - x)` and `s = 2` is [`dilog`]. Orders above 2 are outside what
/// the generator families need and return NaN.
///
/// ```
/// use copula_core::math::special::polylog;
///
/// let pi2_6 = std::f64::consts::PI.powi(2) / 6.0;
/// assert!((polylog(2, 1.0) - pi2_6).abs() < 1e-15);
/// assert!((polylog(1, 0.5) - 2.0_f64.ln()).abs() < 1e-15);
/// ```
pub fn polylog(s: i32, x: f64) -> f64 {
    match s {
        s if s <= 0 => polylog_neg(s.unsigned_abs() as usize, x),
        1 => -(-x).ln_1p(),
        2 => dilog(x),
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn brute_force(s: i32, x: f64) -> f64 {
        (1..20_000)
            .map(|k| x.powi(k) * (k as f64).powi(-s))
            .sum()
    }

    #[test]
    fn test_eulerian_rows() {
        assert_eq!(eulerian_row(0), vec![1.0]);
        assert_eq!(eulerian_row(1), vec![1.0]);
        assert_eq!(eulerian_row(3), vec![1.0, 4.0, 1.0]);
        assert_eq!(eulerian_row(5), vec![1.0, 26.0, 66.0, 26.0, 1.0]);
        // Row sums are n!
        assert_eq!(eulerian_row(6).iter().sum::<f64>(), 720.0);
    }

    #[test]
    fn test_negative_order_matches_series() {
        for n in 0..6 {
            for &x in &[-0.7, -0.2, 0.1, 0.45] {
                let expected = brute_force(-(n as i32), x);
                assert_relative_eq!(polylog_neg(n, x), expected, epsilon = 1e-12, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_negative_order_large_negative_argument() {
        // Li_{-1}(x) = x / (1 - x)^2 stays finite for huge |x|
        let x = -1e200;
        let value = polylog_neg(1, x);
        assert!(value.is_finite());
        assert!(value < 0.0);
    }

    #[test]
    fn test_dilog_special_values() {
        assert_relative_eq!(dilog(0.0), 0.0);
        assert_relative_eq!(dilog(-1.0), -PI * PI / 12.0, epsilon = 1e-15);
        let ln2 = 2.0_f64.ln();
        assert_relative_eq!(dilog(0.5), PI * PI / 12.0 - 0.5 * ln2 * ln2, epsilon = 1e-15);
        assert!(dilog(1.5).is_nan());
    }

    #[test]
    fn test_dilog_matches_series_across_branches() {
        for &x in &[-0.95, -0.6, -0.3, 0.2, 0.49, 0.51, 0.8] {
            assert_relative_eq!(dilog(x), brute_force(2, x), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_dilog_inversion_branch() {
        // Li_2(-x) + Li_2(-1/x) = -pi^2/6 - ln^2(x)/2
        let x: f64 = 3.0;
        let lhs = dilog(-x) + dilog(-1.0 / x);
        assert_relative_eq!(lhs, -PI2_OVER_6 - 0.5 * x.ln().powi(2), epsilon = 1e-14);
    }

    #[test]
    fn test_polylog_dispatch() {
        assert_relative_eq!(polylog(-2, 0.3), polylog_neg(2, 0.3));
        assert_relative_eq!(polylog(1, -0.5), -(1.5_f64).ln());
        assert!(polylog(3, 0.5).is_nan());
    }
}
