//! Radial part of the Archimedean stochastic representation.
//!
//! Every d-dimensional Archimedean copula is the law of `φ(R · S)` with S
//! uniform on the unit simplex and R ≥ 0 independent of S. Completely
//! monotone generators with a known frailty M allow the shortcut
//! `Uᵢ = φ(Eᵢ / M)`; all others go through the Williamson d-transform,
//! whose inverse gives the law of R:
//!
//! ```text
//! F_R(x) = 1 - Σ_{k=0}^{d-1} (-x)^k φ^(k)(x) / k!
//! ```

use crate::error::SamplingError;
use crate::frailty::FrailtySampler;
use crate::rng::CopulaRng;
use copula_core::math::solvers::{expand_upper_bracket, invert_cdf, SolverConfig};
use copula_models::archimedean::{ArchimedeanCopula, ArchimedeanGenerator, Generator};
use tracing::debug;

/// Initial upper bracket of the radial quantile search.
const INITIAL_UPPER_BRACKET: f64 = 1.0;

/// Law of R for a Williamson d-transform generator.
#[derive(Debug, Clone)]
pub struct WilliamsonRadial {
    generator: ArchimedeanGenerator,
    dimension: usize,
    solver: SolverConfig<f64>,
    /// 1/k! for k < d
    inverse_factorials: Vec<f64>,
}

impl WilliamsonRadial {
    /// Radial law of the d-dimensional copula generated by `generator`.
    pub fn new(generator: ArchimedeanGenerator, dimension: usize, solver: SolverConfig<f64>) -> Self {
        let mut inverse_factorials = Vec::with_capacity(dimension);
        let mut factorial = 1.0;
        for k in 0..dimension {
            if k > 0 {
                factorial *= k as f64;
            }
            inverse_factorials.push(1.0 / factorial);
        }
        Self {
            generator,
            dimension,
            solver,
            inverse_factorials,
        }
    }

    /// Dimension d of the transform.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// CDF of R.
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let mut power = 1.0;
        let mut sum = 0.0;
        for (k, inverse_factorial) in self.inverse_factorials.iter().enumerate() {
            sum += power * self.generator.phi_derivative(x, k) * inverse_factorial;
            power *= -x;
        }
        (1.0 - sum).clamp(0.0, 1.0)
    }

    /// Quantile of R.
    ///
    /// # Errors
    ///
    /// [`SamplingError::RadialBracket`] if no finite upper bracket exists and
    /// [`SamplingError::Inversion`] if root-finding fails.
    pub fn quantile(&self, p: f64) -> Result<f64, SamplingError> {
        let cdf = |x: f64| self.cdf(x);
        let upper = expand_upper_bracket(cdf, p, INITIAL_UPPER_BRACKET)
            .map_err(SamplingError::RadialBracket)?;
        Ok(invert_cdf(cdf, p, 0.0, upper, &self.solver)?)
    }

    /// Draw R by inversion.
    ///
    /// # Errors
    ///
    /// See [`quantile`](Self::quantile).
    pub fn sample(&self, rng: &mut CopulaRng) -> Result<f64, SamplingError> {
        self.quantile(rng.gen_open_uniform())
    }
}

/// Radial sampling strategy for an Archimedean copula.
#[derive(Debug, Clone)]
pub enum RadialTransform {
    /// `Uᵢ = φ(Eᵢ / M)` with M drawn from the frailty law.
    Frailty(FrailtySampler),
    /// `Uᵢ = φ(R · Eᵢ / ΣE)` with R drawn from the Williamson transform.
    Williamson(WilliamsonRadial),
}

impl RadialTransform {
    /// Frailty route when the generator has one, Williamson otherwise.
    ///
    /// # Errors
    ///
    /// [`SamplingError::Frailty`] if the frailty law rejects its parameters.
    pub fn for_copula(copula: &ArchimedeanCopula, solver: SolverConfig<f64>) -> Result<Self, SamplingError> {
        let generator = copula.generator();
        match generator.frailty() {
            Some(frailty) => {
                debug!(family = %generator.family(), ?frailty, "sampling through frailty");
                Ok(RadialTransform::Frailty(FrailtySampler::new(&frailty)?))
            }
            None => Ok(Self::williamson(copula, solver)),
        }
    }

    /// Williamson route regardless of whether a frailty exists.
    pub fn williamson(copula: &ArchimedeanCopula, solver: SolverConfig<f64>) -> Self {
        debug!(
            family = %copula.generator().family(),
            dimension = copula.dimension(),
            "sampling through Williamson transform"
        );
        RadialTransform::Williamson(WilliamsonRadial::new(
            *copula.generator(),
            copula.dimension(),
            solver,
        ))
    }
}
