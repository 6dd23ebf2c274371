//! Rayon batch sampling and density evaluation.
//!
//! Rows are drawn in fixed-size batches. Batch `b` uses an RNG seeded from
//! `(seed, b)` alone, so the matrix returned by [`sample_copula`] is the same
//! whether batches run on one thread or many.

use crate::config::SamplerConfig;
use crate::error::SamplingError;
use crate::matrix::SampleMatrix;
use crate::rng::CopulaRng;
use crate::sampler::ArchimedeanSampler;
use copula_models::archimedean::{ArchimedeanCopula, Generator};
use copula_models::CopulaError;
use rayon::prelude::*;
use tracing::info;

/// Seed of batch `batch` under master seed `seed` (SplitMix64 finaliser).
pub fn batch_seed(seed: u64, batch: usize) -> u64 {
    let mut z = seed.wrapping_add((batch as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Draw `config.n_samples()` rows from `copula`.
///
/// # Errors
///
/// - [`SamplingError::Config`] if `config` is invalid
/// - any error raised while drawing a row
pub fn sample_copula(copula: &ArchimedeanCopula, config: &SamplerConfig) -> Result<SampleMatrix, SamplingError> {
    config.validate()?;
    let sampler = ArchimedeanSampler::new(copula, *config.solver())?;
    let d = copula.dimension();
    let mut samples = SampleMatrix::zeros(config.n_samples(), d);
    let chunk_len = config.batch_size() * d;

    info!(
        family = %copula.generator().family(),
        dimension = d,
        n_samples = config.n_samples(),
        n_batches = config.n_batches(),
        parallel = config.should_parallelise(),
        "sampling copula"
    );

    let draw_batch = |(batch, chunk): (usize, &mut [f64])| -> Result<(), SamplingError> {
        let mut rng = CopulaRng::from_seed(batch_seed(config.seed(), batch));
        for row in chunk.chunks_exact_mut(d) {
            sampler.sample_into(&mut rng, row)?;
        }
        Ok(())
    };

    if config.should_parallelise() {
        samples
            .as_mut_slice()
            .par_chunks_mut(chunk_len)
            .enumerate()
            .try_for_each(draw_batch)?;
    } else {
        samples
            .as_mut_slice()
            .chunks_mut(chunk_len)
            .enumerate()
            .try_for_each(draw_batch)?;
    }
    Ok(samples)
}

/// Log-density of `copula` at every row of `samples`, in row order.
///
/// # Errors
///
/// [`CopulaError::InvalidInput`] if the column count differs from the
/// copula dimension or a row contains NaN.
pub fn batch_log_density(copula: &ArchimedeanCopula, samples: &SampleMatrix) -> Result<Vec<f64>, CopulaError> {
    if samples.dimension() != copula.dimension() {
        return Err(CopulaError::invalid_input(format!(
            "samples have {} columns, copula has dimension {}",
            samples.dimension(),
            copula.dimension()
        )));
    }
    samples
        .as_slice()
        .par_chunks(samples.dimension())
        .map(|row| copula.log_density(row))
        .collect()
}
