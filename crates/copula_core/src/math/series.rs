//! Truncated Taylor-series arithmetic.
//!
//! A series is a slice `c` of coefficients with `f(t + h) = Σ c_k h^k`.
//! Composing elementary operations on series gives every derivative
//! `f^(k)(t) = k! c_k` exactly, up to rounding, which is what the generator
//! families without a compact closed-form derivative rely on.
//!
//! # Example
//!
//! ```
//! use copula_core::math::series::{derivatives_from_series, series_exp};
//!
//! // exp(t + h) around t = 0: every derivative equals 1
//! let coefficients = series_exp(&[0.0, 1.0, 0.0, 0.0], 4);
//! let derivatives = derivatives_from_series(&coefficients);
//! assert!(derivatives.iter().all(|d| (d - 1.0).abs() < 1e-15));
//! ```

/// Taylor coefficients of `(t + h)` around `t`, truncated to `order + 1` terms.
pub fn series_variable(t: f64, order: usize) -> Vec<f64> {
    let mut coefficients = vec![0.0; order + 1];
    coefficients[0] = t;
    if order >= 1 {
        coefficients[1] = 1.0;
    }
    coefficients
}

/// Coefficients of `exp(g)`, truncated to `len` terms.
pub fn series_exp(g: &[f64], len: usize) -> Vec<f64> {
    let mut out = vec![0.0; len];
    if len == 0 {
        return out;
    }
    out[0] = g.first().copied().unwrap_or(0.0).exp();
    for m in 1..len {
        let sum: f64 = (1..=m.min(g.len().saturating_sub(1)))
            .map(|j| j as f64 * g[j] * out[m - j])
            .sum();
        out[m] = sum / m as f64;
    }
    out
}

/// Coefficients of `g^alpha` for `g_0 > 0`, truncated to `len` terms.
///
/// Uses the J. C. P. Miller recurrence
/// `p_m = (1 / (m g_0)) Σ_{j=1}^{m} ((alpha + 1) j - m) g_j p_{m-j}`.
pub fn series_pow(g: &[f64], alpha: f64, len: usize) -> Vec<f64> {
    let mut out = vec![0.0; len];
    if len == 0 {
        return out;
    }
    let g0 = g.first().copied().unwrap_or(0.0);
    out[0] = g0.powf(alpha);
    for m in 1..len {
        let sum: f64 = (1..=m.min(g.len().saturating_sub(1)))
            .map(|j| ((alpha + 1.0) * j as f64 - m as f64) * g[j] * out[m - j])
            .sum();
        out[m] = sum / (m as f64 * g0);
    }
    out
}

/// Scale each coefficient: `c_k ↦ scale * c_k`.
pub fn series_scale(g: &[f64], scale: f64) -> Vec<f64> {
    g.iter().map(|c| c * scale).collect()
}

/// Convert Taylor coefficients to derivatives: `f^(k) = k! c_k`.
pub fn derivatives_from_series(coefficients: &[f64]) -> Vec<f64> {
    let mut factorial = 1.0;
    coefficients
        .iter()
        .enumerate()
        .map(|(k, &c)| {
            if k > 0 {
                factorial *= k as f64;
            }
            c * factorial
        })
        .collect()
}
