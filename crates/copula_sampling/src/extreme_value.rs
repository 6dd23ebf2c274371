//! Two-stage sampler for bivariate extreme-value copulas.
//!
//! Draw Z from the auxiliary distribution, then W = C(U, V) given Z, which
//! is uniform with probability p(Z) and a product of two uniforms otherwise.
//! The pair follows from `U = W^{(1 - Z) / A(Z)}` and `V = W^{Z / A(Z)}`.

use crate::error::SamplingError;
use crate::matrix::SampleMatrix;
use crate::rng::CopulaRng;
use copula_core::math::solvers::SolverConfig;
use copula_models::extreme_value::{ExtremeDistribution, PickandsFunction};

/// Sampler of the extreme-value copula with Pickands function `P`.
#[derive(Debug, Clone)]
pub struct ExtremeValueSampler<P> {
    distribution: ExtremeDistribution<P>,
}

impl<P: PickandsFunction> ExtremeValueSampler<P> {
    /// Sampler for `pickands` with default solver settings.
    pub fn new(pickands: P) -> Self {
        Self {
            distribution: ExtremeDistribution::new(pickands),
        }
    }

    /// Replace the solver used to invert the auxiliary CDF.
    pub fn with_solver(self, solver: SolverConfig<f64>) -> Self {
        Self {
            distribution: self.distribution.with_solver(solver),
        }
    }

    /// Auxiliary distribution of Z.
    pub fn distribution(&self) -> &ExtremeDistribution<P> {
        &self.distribution
    }

    /// Draw one pair (U, V).
    ///
    /// # Errors
    ///
    /// [`SamplingError::Inversion`] if the auxiliary quantile cannot be found.
    pub fn sample_pair(&self, rng: &mut CopulaRng) -> Result<(f64, f64), SamplingError> {
        let z = self.distribution.quantile(rng.gen_open_uniform())?;
        let p = self.distribution.mixing_probability(z);

        let u1 = rng.gen_open_uniform();
        let w = if rng.gen_uniform() < p {
            u1
        } else {
            u1 * rng.gen_open_uniform()
        };

        let a = self.distribution.pickands().value(z);
        Ok((w.powf((1.0 - z) / a), w.powf(z / a)))
    }

    /// Draw `n` pairs as an `n × 2` matrix.
    ///
    /// # Errors
    ///
    /// See [`sample_pair`](Self::sample_pair).
    pub fn sample(&self, n: usize, rng: &mut CopulaRng) -> Result<SampleMatrix, SamplingError> {
        let mut samples = SampleMatrix::zeros(n, 2);
        for row in samples.as_mut_slice().chunks_exact_mut(2) {
            let (u, v) = self.sample_pair(rng)?;
            row[0] = u;
            row[1] = v;
        }
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use copula_models::empirical::kendall_tau;
    use copula_models::extreme_value::LogisticPickands;

    #[test]
    fn test_logistic_kendall_tau() {
        // τ = 1 - 1/θ for the logistic model
        let sampler = ExtremeValueSampler::new(LogisticPickands::new(2.0).unwrap());
        let samples = sampler.sample(3_000, &mut CopulaRng::from_seed(4)).unwrap();
        let tau = kendall_tau(&samples.column(0).unwrap(), &samples.column(1).unwrap()).unwrap();
        assert_relative_eq!(tau, 0.5, epsilon = 0.04);
    }

    #[test]
    fn test_independence_has_uniform_margins() {
        let sampler = ExtremeValueSampler::new(LogisticPickands::new(1.0).unwrap());
        let samples = sampler.sample(4_000, &mut CopulaRng::from_seed(9)).unwrap();
        for j in 0..2 {
            let column = samples.column(j).unwrap();
            let mean = column.iter().sum::<f64>() / column.len() as f64;
            assert_relative_eq!(mean, 0.5, epsilon = 0.02);
        }
    }

    #[test]
    fn test_pairs_in_unit_square() {
        let sampler = ExtremeValueSampler::new(LogisticPickands::new(5.0).unwrap());
        let mut rng = CopulaRng::from_seed(2);
        for _ in 0..500 {
            let (u, v) = sampler.sample_pair(&mut rng).unwrap();
            assert!((0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v));
        }
    }
}
