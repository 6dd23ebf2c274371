//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Errors from a single root-finding method
//! - `RootFindingFailure`: Both methods of the fallback chain failed

use thiserror::Error;

/// Root-finding solver errors.
///
/// Provides structured error handling for root-finding solver operations
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to converge within iteration limit
/// - `NoBracket`: Function values at bracket endpoints have same sign
/// - `NumericalInstability`: Non-finite function values or bracket
///
/// # Examples
/// ```
/// use copula_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

/// Failure of the two-step root-finding procedure.
///
/// Carries the error of the primary (Brent) attempt and of the bisection
/// fallback so callers can report both.
///
/// # Examples
/// ```
/// use copula_core::types::{RootFindingFailure, SolverError};
///
/// let failure = RootFindingFailure {
///     primary: SolverError::NoBracket { a: 0.0, b: 1.0 },
///     fallback: SolverError::NoBracket { a: 0.0, b: 1.0 },
/// };
/// assert!(failure.to_string().contains("bisection"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("Brent failed ({primary}); bisection failed ({fallback})")]
pub struct RootFindingFailure {
    /// Error reported by the Brent solver.
    pub primary: SolverError,
    /// Error reported by the bisection fallback.
    pub fallback: SolverError,
}

impl RootFindingFailure {
    /// Iterations consumed by the fallback, when it ran out of budget.
    pub fn iterations(&self) -> Option<usize> {
        match self.fallback {
            SolverError::MaxIterationsExceeded { iterations } => Some(iterations),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_error_display() {
        let err = SolverError::NoBracket { a: 1.0, b: 2.0 };
        assert_eq!(err.to_string(), "No bracket: f(1) and f(2) have same sign");

        let err = SolverError::NumericalInstability("f(a) is NaN".to_string());
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn test_failure_iterations() {
        let failure = RootFindingFailure {
            primary: SolverError::MaxIterationsExceeded { iterations: 10 },
            fallback: SolverError::MaxIterationsExceeded { iterations: 10 },
        };
        assert_eq!(failure.iterations(), Some(10));

        let failure = RootFindingFailure {
            primary: SolverError::NoBracket { a: 0.0, b: 1.0 },
            fallback: SolverError::NoBracket { a: 0.0, b: 1.0 },
        };
        assert_eq!(failure.iterations(), None);
    }
}
