//! Single-threaded Archimedean sampler.

use crate::error::SamplingError;
use crate::matrix::SampleMatrix;
use crate::radial::RadialTransform;
use crate::rng::CopulaRng;
use copula_core::math::solvers::SolverConfig;
use copula_models::archimedean::{ArchimedeanCopula, Generator};
use copula_models::CopulaError;

/// Draws observations from an [`ArchimedeanCopula`].
///
/// Setup (frailty law preparation or Williamson factorials) happens once in
/// [`new`](Self::new); [`sample_into`](Self::sample_into) only draws.
///
/// # Example
///
/// ```
/// use copula_models::archimedean::{ArchimedeanCopula, ArchimedeanGenerator};
/// use copula_sampling::rng::CopulaRng;
/// use copula_sampling::sampler::ArchimedeanSampler;
///
/// let copula = ArchimedeanCopula::new(ArchimedeanGenerator::frank(-3.0).unwrap(), 2).unwrap();
/// let sampler = ArchimedeanSampler::new(&copula, Default::default()).unwrap();
/// let mut rng = CopulaRng::from_seed(1);
/// let samples = sampler.sample(100, &mut rng).unwrap();
/// assert_eq!(samples.n_rows(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct ArchimedeanSampler {
    copula: ArchimedeanCopula,
    radial: RadialTransform,
}

impl ArchimedeanSampler {
    /// Sampler using the frailty route when available.
    ///
    /// # Errors
    ///
    /// [`SamplingError::Frailty`] if the frailty law rejects its parameters.
    pub fn new(copula: &ArchimedeanCopula, solver: SolverConfig<f64>) -> Result<Self, SamplingError> {
        Ok(Self {
            copula: *copula,
            radial: RadialTransform::for_copula(copula, solver)?,
        })
    }

    /// Sampler with an explicit radial strategy.
    pub fn with_radial(copula: &ArchimedeanCopula, radial: RadialTransform) -> Self {
        Self {
            copula: *copula,
            radial,
        }
    }

    /// Copula being sampled.
    pub fn copula(&self) -> &ArchimedeanCopula {
        &self.copula
    }

    /// Radial strategy in use.
    pub fn radial(&self) -> &RadialTransform {
        &self.radial
    }

    /// Write one observation into `out`.
    ///
    /// # Errors
    ///
    /// - [`SamplingError::Copula`] if `out.len()` differs from the dimension
    /// - radial inversion errors on the Williamson route
    pub fn sample_into(&self, rng: &mut CopulaRng, out: &mut [f64]) -> Result<(), SamplingError> {
        let d = self.copula.dimension();
        if out.len() != d {
            return Err(CopulaError::invalid_input(format!(
                "output row has length {}, expected {d}",
                out.len()
            ))
            .into());
        }

        let generator = self.copula.generator();
        rng.fill_exponential(out);
        match &self.radial {
            RadialTransform::Frailty(frailty) => {
                let m = frailty.sample(rng);
                for value in out.iter_mut() {
                    *value = generator.phi(*value / m);
                }
            }
            RadialTransform::Williamson(radial) => {
                let r = radial.sample(rng)?;
                let total: f64 = out.iter().sum();
                for value in out.iter_mut() {
                    *value = generator.phi(r * *value / total);
                }
            }
        }
        Ok(())
    }

    /// Draw `n` observations.
    ///
    /// # Errors
    ///
    /// See [`sample_into`](Self::sample_into).
    pub fn sample(&self, n: usize, rng: &mut CopulaRng) -> Result<SampleMatrix, SamplingError> {
        let d = self.copula.dimension();
        let mut samples = SampleMatrix::zeros(n, d);
        for row in samples.as_mut_slice().chunks_exact_mut(d) {
            self.sample_into(rng, row)?;
        }
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use copula_models::archimedean::ArchimedeanGenerator;
    use copula_models::empirical::kendall_tau;

    fn tau_of(samples: &SampleMatrix) -> f64 {
        let x = samples.column(0).unwrap();
        let y = samples.column(1).unwrap();
        kendall_tau(&x, &y).unwrap()
    }

    #[test]
    fn test_samples_in_unit_cube() {
        let copula = ArchimedeanCopula::new(ArchimedeanGenerator::joe(3.0).unwrap(), 4).unwrap();
        let sampler = ArchimedeanSampler::new(&copula, SolverConfig::default()).unwrap();
        let samples = sampler.sample(500, &mut CopulaRng::from_seed(8)).unwrap();
        assert!(samples.as_slice().iter().all(|&u| (0.0..=1.0).contains(&u)));
    }

    #[test]
    fn test_frailty_and_williamson_routes_agree() {
        let copula = ArchimedeanCopula::new(ArchimedeanGenerator::clayton(2.0).unwrap(), 2).unwrap();
        let frailty = ArchimedeanSampler::new(&copula, SolverConfig::default()).unwrap();
        assert!(matches!(frailty.radial(), RadialTransform::Frailty(_)));
        let williamson = ArchimedeanSampler::with_radial(
            &copula,
            RadialTransform::williamson(&copula, SolverConfig::default()),
        );

        let a = frailty.sample(3_000, &mut CopulaRng::from_seed(21)).unwrap();
        let b = williamson.sample(3_000, &mut CopulaRng::from_seed(22)).unwrap();
        assert_relative_eq!(tau_of(&a), 0.5, epsilon = 0.04);
        assert_relative_eq!(tau_of(&b), 0.5, epsilon = 0.04);
    }

    #[test]
    fn test_negative_dependence_through_williamson() {
        let g = ArchimedeanGenerator::frank(-6.0).unwrap();
        let copula = ArchimedeanCopula::new(g, 2).unwrap();
        let sampler = ArchimedeanSampler::new(&copula, SolverConfig::default()).unwrap();
        let samples = sampler.sample(3_000, &mut CopulaRng::from_seed(5)).unwrap();
        assert_relative_eq!(tau_of(&samples), g.tau(), epsilon = 0.04);
    }

    #[test]
    fn test_wrong_row_length() {
        let copula = ArchimedeanCopula::new(ArchimedeanGenerator::independence(), 3).unwrap();
        let sampler = ArchimedeanSampler::new(&copula, SolverConfig::default()).unwrap();
        let mut row = [0.0; 2];
        assert!(matches!(
            sampler.sample_into(&mut CopulaRng::from_seed(1), &mut row),
            Err(SamplingError::Copula(_))
        ));
    }

    #[test]
    fn test_reproducible() {
        let copula = ArchimedeanCopula::new(ArchimedeanGenerator::amh(0.5).unwrap(), 3).unwrap();
        let sampler = ArchimedeanSampler::new(&copula, SolverConfig::default()).unwrap();
        let a = sampler.sample(50, &mut CopulaRng::from_seed(77)).unwrap();
        let b = sampler.sample(50, &mut CopulaRng::from_seed(77)).unwrap();
        assert_eq!(a, b);
    }
}
