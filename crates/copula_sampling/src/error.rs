//! Error types for the sampling engine.

use copula_core::types::{RootFindingFailure, SolverError};
use copula_models::CopulaError;
use thiserror::Error;

/// Invalid sampler configuration, raised by the builder.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Sample count outside `[1, MAX_SAMPLES]`.
    #[error("invalid sample count {0}: must be in range [1, 100_000_000]")]
    InvalidSampleCount(usize),

    /// Batch size of zero.
    #[error("invalid batch size {0}: must be positive")]
    InvalidBatchSize(usize),

    /// Invalid parameter value with name and description.
    #[error("invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Errors raised while drawing samples.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum SamplingError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Invalid copula or density input.
    #[error(transparent)]
    Copula(#[from] CopulaError),

    /// No upper bracket for the radial quantile.
    #[error("radial quantile bracket search failed: {0}")]
    RadialBracket(SolverError),

    /// Quantile inversion failed in both solvers.
    #[error("quantile inversion failed: {0}")]
    Inversion(#[from] RootFindingFailure),

    /// Frailty law rejected its parameters.
    #[error("invalid frailty law: {0}")]
    Frailty(String),
}
