//! Sampler configuration.

use super::error::ConfigError;
use copula_core::math::solvers::SolverConfig;

/// Largest sample count accepted by the builder.
pub const MAX_SAMPLES: usize = 100_000_000;

/// Rows per batch; each batch owns an RNG seeded from the master seed.
pub const DEFAULT_BATCH_SIZE: usize = 1_024;

/// Sample counts at or above this are drawn on the Rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 8_192;

/// Configuration of a batch sampling run.
///
/// # Examples
///
/// ```rust
/// use copula_sampling::config::SamplerConfig;
///
/// let config = SamplerConfig::builder()
///     .n_samples(50_000)
///     .seed(42)
///     .batch_size(512)
///     .build()
///     .unwrap();
/// assert_eq!(config.n_samples(), 50_000);
/// assert_eq!(config.n_batches(), 98);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerConfig {
    n_samples: usize,
    seed: u64,
    batch_size: usize,
    parallel_threshold: usize,
    solver: SolverConfig<f64>,
}

impl SamplerConfig {
    /// Start a builder.
    #[inline]
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Number of rows to draw.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Master seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rows per batch.
    #[inline]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Sample count from which the Rayon pool is used.
    #[inline]
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Solver settings for radial quantile inversion.
    #[inline]
    pub fn solver(&self) -> &SolverConfig<f64> {
        &self.solver
    }

    /// Number of batches, the last one possibly partial.
    #[inline]
    pub fn n_batches(&self) -> usize {
        self.n_samples.div_ceil(self.batch_size)
    }

    /// Whether this run should go to the Rayon pool.
    #[inline]
    pub fn should_parallelise(&self) -> bool {
        self.n_samples >= self.parallel_threshold
    }

    /// Check all fields.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_samples == 0 || self.n_samples > MAX_SAMPLES {
            return Err(ConfigError::InvalidSampleCount(self.n_samples));
        }
        if self.batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize(self.batch_size));
        }
        if !self.solver.is_valid() {
            return Err(ConfigError::InvalidParameter {
                name: "solver",
                value: format!(
                    "tolerance {} and max_iterations {} must be positive",
                    self.solver.tolerance, self.solver.max_iterations
                ),
            });
        }
        Ok(())
    }
}

/// Builder for [`SamplerConfig`].
#[derive(Clone, Debug, Default)]
pub struct SamplerConfigBuilder {
    n_samples: Option<usize>,
    seed: Option<u64>,
    batch_size: Option<usize>,
    parallel_threshold: Option<usize>,
    solver: Option<SolverConfig<f64>>,
}

impl SamplerConfigBuilder {
    /// Number of rows to draw (required).
    #[inline]
    pub fn n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = Some(n_samples);
        self
    }

    /// Master seed (default 0).
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rows per batch (default [`DEFAULT_BATCH_SIZE`]).
    #[inline]
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Parallel threshold (default [`DEFAULT_PARALLEL_THRESHOLD`]).
    #[inline]
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }

    /// Radial quantile solver settings.
    #[inline]
    pub fn solver(mut self, solver: SolverConfig<f64>) -> Self {
        self.solver = Some(solver);
        self
    }

    /// Build and validate.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if `n_samples` is missing or any field is invalid.
    pub fn build(self) -> Result<SamplerConfig, ConfigError> {
        let n_samples = self.n_samples.ok_or_else(|| ConfigError::InvalidParameter {
            name: "n_samples",
            value: "must be set".to_string(),
        })?;
        let config = SamplerConfig {
            n_samples,
            seed: self.seed.unwrap_or(0),
            batch_size: self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE),
            parallel_threshold: self.parallel_threshold.unwrap_or(DEFAULT_PARALLEL_THRESHOLD),
            solver: self.solver.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}
