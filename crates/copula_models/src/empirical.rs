//! Sample rank correlations.
//!
//! Used to check samplers against the closed-form measures and as
//! method-of-moments targets for [`fit_parameter`](crate::calibration::fit_parameter).

use crate::error::CopulaError;

/// Sample Kendall's tau, `(concordant - discordant) / (n choose 2)`.
///
/// Tied pairs count as neither concordant nor discordant.
///
/// # Errors
///
/// [`CopulaError::InvalidInput`] if the slices differ in length or hold
/// fewer than two observations.
pub fn kendall_tau(x: &[f64], y: &[f64]) -> Result<f64, CopulaError> {
    check_paired(x, y)?;
    let n = x.len();
    let mut score: i64 = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            let product = (x[i] - x[j]) * (y[i] - y[j]);
            if product > 0.0 {
                score += 1;
            } else if product < 0.0 {
                score -= 1;
            }
        }
    }
    let pairs = (n * (n - 1) / 2) as f64;
    Ok(score as f64 / pairs)
}

/// Sample Spearman's rho: Pearson correlation of mid-ranks.
///
/// # Errors
///
/// [`CopulaError::InvalidInput`] if the slices differ in length or hold
/// fewer than two observations.
pub fn spearman_rho(x: &[f64], y: &[f64]) -> Result<f64, CopulaError> {
    check_paired(x, y)?;
    let rx = ranks(x);
    let ry = ranks(y);
    Ok(pearson(&rx, &ry))
}

/// Mid-ranks (1-based, ties averaged).
pub fn ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut out = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && values[order[end]] == values[order[start]] {
            end += 1;
        }
        let mid_rank = (start + end + 1) as f64 / 2.0;
        for &index in &order[start..end] {
            out[index] = mid_rank;
        }
        start = end;
    }
    out
}

fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    sxy / (sxx * syy).sqrt()
}

fn check_paired(x: &[f64], y: &[f64]) -> Result<(), CopulaError> {
    if x.len() != y.len() {
        return Err(CopulaError::invalid_input(format!(
            "paired samples differ in length: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(CopulaError::invalid_input("at least two observations are required"));
    }
    Ok(())
}
