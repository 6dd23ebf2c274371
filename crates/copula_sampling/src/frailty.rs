//! Samplers for the frailty laws of the generator families.
//!
//! Each law is prepared once from its [`Frailty`] descriptor so that
//! per-draw work is limited to a few uniforms and elementary functions.

use crate::error::SamplingError;
use crate::rng::CopulaRng;
use copula_core::math::special::{ln_beta, ln_gamma};
use copula_models::archimedean::Frailty;
use rand_distr::Gamma;
use std::f64::consts::PI;

/// Above this the Sibuya quantile is returned without the discrete correction.
const SIBUYA_MAX_QUANTILE: f64 = 1.0 / f64::EPSILON;

/// Prepared sampler for a frailty law.
#[derive(Debug, Clone)]
pub enum FrailtySampler {
    /// Point mass.
    Dirac(f64),
    /// Gamma law.
    Gamma(Gamma<f64>),
    /// Positive stable law with index α.
    PositiveStable {
        /// Stability index
        alpha: f64,
    },
    /// Logarithmic series law, sampled with Kemp's LK algorithm.
    Logarithmic {
        /// Frank parameter θ
        theta: f64,
        /// p = 1 - e^{-θ}
        p: f64,
    },
    /// Geometric law on {1, 2, …}.
    Geometric {
        /// ln θ
        ln_theta: f64,
    },
    /// Sibuya law with index α.
    Sibuya {
        /// Index α
        alpha: f64,
        /// ln Γ(1 - α)
        ln_gamma_1_minus_alpha: f64,
    },
}

impl FrailtySampler {
    /// Prepare a sampler for `frailty`.
    ///
    /// # Errors
    ///
    /// [`SamplingError::Frailty`] if the law's parameters are out of range.
    pub fn new(frailty: &Frailty) -> Result<Self, SamplingError> {
        match *frailty {
            Frailty::Dirac { value } => Ok(FrailtySampler::Dirac(value)),
            Frailty::Gamma { shape, scale } => Gamma::new(shape, scale)
                .map(FrailtySampler::Gamma)
                .map_err(|e| SamplingError::Frailty(format!("gamma({shape}, {scale}): {e}"))),
            Frailty::PositiveStable { alpha } if alpha > 0.0 && alpha <= 1.0 => {
                Ok(FrailtySampler::PositiveStable { alpha })
            }
            Frailty::Logarithmic { theta } if theta > 0.0 => Ok(FrailtySampler::Logarithmic {
                theta,
                p: -(-theta).exp_m1(),
            }),
            Frailty::Geometric { theta } if theta > 0.0 && theta < 1.0 => {
                Ok(FrailtySampler::Geometric {
                    ln_theta: theta.ln(),
                })
            }
            Frailty::Sibuya { alpha } if alpha > 0.0 && alpha <= 1.0 => Ok(FrailtySampler::Sibuya {
                alpha,
                ln_gamma_1_minus_alpha: if alpha < 1.0 { ln_gamma(1.0 - alpha) } else { 0.0 },
            }),
            other => Err(SamplingError::Frailty(format!("parameters out of range: {other:?}"))),
        }
    }

    /// Draw one value of the frailty M > 0.
    pub fn sample(&self, rng: &mut CopulaRng) -> f64 {
        match *self {
            FrailtySampler::Dirac(value) => value,
            FrailtySampler::Gamma(ref gamma) => rng.sample(gamma),
            FrailtySampler::PositiveStable { alpha } => positive_stable(alpha, rng),
            FrailtySampler::Logarithmic { theta, p } => logarithmic(theta, p, rng),
            FrailtySampler::Geometric { ln_theta } => {
                1.0 + (rng.gen_open_uniform().ln() / ln_theta).floor()
            }
            FrailtySampler::Sibuya {
                alpha,
                ln_gamma_1_minus_alpha,
            } => sibuya(alpha, ln_gamma_1_minus_alpha, rng),
        }
    }
}

/// Kanter's representation of the one-sided stable law with Laplace
/// transform `exp(-t^α)`.
fn positive_stable(alpha: f64, rng: &mut CopulaRng) -> f64 {
    if alpha == 1.0 {
        return 1.0;
    }
    let u = PI * rng.gen_open_uniform();
    let e = rng.gen_exponential();
    let a = (alpha * u).sin() / u.sin().powf(1.0 / alpha);
    let b = ((1.0 - alpha) * u).sin() / e;
    a * b.powf((1.0 - alpha) / alpha)
}

/// Kemp's LK algorithm for the logarithmic series law.
fn logarithmic(theta: f64, p: f64, rng: &mut CopulaRng) -> f64 {
    let v = rng.gen_open_uniform();
    if v >= p {
        return 1.0;
    }
    let q = -(-theta * rng.gen_open_uniform()).exp_m1();
    if v > q {
        1.0
    } else if v > q * q {
        2.0
    } else {
        1.0 + (v.ln() / q.ln()).floor()
    }
}

/// Inversion sampler of the Sibuya law with a one-step discrete correction.
fn sibuya(alpha: f64, ln_gamma_1_minus_alpha: f64, rng: &mut CopulaRng) -> f64 {
    let u = rng.gen_open_uniform();
    if u <= alpha {
        return 1.0;
    }
    let tail = 1.0 - u;
    let quantile = ((tail.ln() + ln_gamma_1_minus_alpha) * (-1.0 / alpha)).exp();
    if quantile > SIBUYA_MAX_QUANTILE {
        return quantile.floor();
    }
    let floor = quantile.floor().max(1.0);
    // Survival function at floor is 1 / (floor · B(floor, 1 - α))
    if tail.ln() < -(floor.ln() + ln_beta(floor, 1.0 - alpha)) {
        floor + 1.0
    } else {
        floor
    }
}
