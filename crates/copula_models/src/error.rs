//! Copula error types.
//!
//! Parameter and dimension violations fail at construction time so an
//! invalid copula can never be sampled or scored. Calibration saturation is
//! not an error: it is reported through
//! [`Saturation`](crate::calibration::Saturation) alongside a usable
//! parameter.

use crate::archimedean::Monotony;
use crate::calibration::DependenceMeasure;
use copula_core::types::RootFindingFailure;
use thiserror::Error;

/// Errors raised by the generator framework.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CopulaError {
    /// Parameter outside the family's admissible domain.
    #[error("invalid parameter for {family}: θ = {value} ({reason})")]
    InvalidParameter {
        /// Family name
        family: &'static str,
        /// Offending value
        value: f64,
        /// Admissible domain or rule that was violated
        reason: String,
    },

    /// Requested dimension exceeds the generator's maximal monotonicity.
    #[error("{family} generator is {max_monotony}-monotone and cannot support dimension {dimension}")]
    UnsupportedDimension {
        /// Family name
        family: &'static str,
        /// Requested dimension
        dimension: usize,
        /// Maximal monotonicity of the generator
        max_monotony: Monotony,
    },

    /// Root-finding exhausted both methods without converging.
    #[error("calibration of {family} to {measure} = {target} failed: {source}")]
    CalibrationFailed {
        /// Family name
        family: &'static str,
        /// Dependence measure being inverted
        measure: DependenceMeasure,
        /// Requested value of the measure
        target: f64,
        /// Errors of the Brent and bisection attempts
        source: RootFindingFailure,
    },

    /// Malformed input (wrong vector length, dimension below 2, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl CopulaError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(family: &'static str, value: f64, reason: impl Into<String>) -> Self {
        CopulaError::InvalidParameter {
            family,
            value,
            reason: reason.into(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CopulaError::InvalidInput(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copula_core::types::SolverError;

    #[test]
    fn test_error_display() {
        let err = CopulaError::invalid_parameter("Clayton", -2.0, "θ must be ≥ -1");
        assert!(err.to_string().contains("Clayton"));
        assert!(err.to_string().contains("-2"));

        let err = CopulaError::UnsupportedDimension {
            family: "Frank",
            dimension: 3,
            max_monotony: Monotony::Finite(2),
        };
        assert!(err.to_string().contains("2-monotone"));
        assert!(err.to_string().contains("dimension 3"));
    }

    #[test]
    fn test_calibration_failed_has_source() {
        use std::error::Error;

        let err = CopulaError::CalibrationFailed {
            family: "Joe",
            measure: DependenceMeasure::KendallTau,
            target: 0.4,
            source: RootFindingFailure {
                primary: SolverError::MaxIterationsExceeded { iterations: 5 },
                fallback: SolverError::MaxIterationsExceeded { iterations: 5 },
            },
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("Kendall"));
    }
}
