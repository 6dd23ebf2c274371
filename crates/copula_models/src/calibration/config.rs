//! Calibration configuration and per-family search domains.

use crate::archimedean::GeneratorFamily;
use crate::calibration::DependenceMeasure;
use copula_core::math::solvers::SolverConfig;

/// Upper truncation of unbounded parameter ranges for Kendall's tau.
///
/// The tau formulas are closed-form, so a wide range costs nothing.
const TAU_UPPER_LIMIT: f64 = 1e6;

/// Upper truncation of unbounded parameter ranges for Spearman's rho.
///
/// Families without a closed-form rho are integrated numerically, which
/// loses accuracy as the copula concentrates on the diagonal.
const RHO_UPPER_LIMIT: f64 = 50.0;

/// Settings of the dependence calibrator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationConfig {
    /// Root-finding tolerance and iteration budget.
    pub solver: SolverConfig<f64>,
    /// Inward shift applied to open (singular) domain endpoints.
    pub boundary_epsilon: f64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::calibration(),
            boundary_epsilon: 1e-9,
        }
    }
}

impl CalibrationConfig {
    /// Replace the solver settings.
    pub fn with_solver(mut self, solver: SolverConfig<f64>) -> Self {
        self.solver = solver;
        self
    }

    /// Replace the boundary epsilon.
    pub fn with_boundary_epsilon(mut self, epsilon: f64) -> Self {
        self.boundary_epsilon = epsilon;
        self
    }
}

/// Finite parameter interval searched when inverting a measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationDomain {
    /// Lower endpoint.
    pub lower: f64,
    /// Upper endpoint.
    pub upper: f64,
    /// Whether the lower endpoint is excluded and must be shifted inward.
    pub lower_open: bool,
    /// Whether the upper endpoint is excluded and must be shifted inward.
    pub upper_open: bool,
}

impl CalibrationDomain {
    const fn closed(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            lower_open: false,
            upper_open: false,
        }
    }

    /// Search domain of `family` for `measure`.
    pub fn of(family: GeneratorFamily, measure: DependenceMeasure) -> Self {
        let upper_limit = match measure {
            DependenceMeasure::KendallTau => TAU_UPPER_LIMIT,
            DependenceMeasure::SpearmanRho => RHO_UPPER_LIMIT,
        };
        let (lower, upper) = family.parameter_range();
        match family {
            // W sits at θ = -1 where φ⁻¹ loses smoothness in the rho integrand
            GeneratorFamily::Clayton if measure == DependenceMeasure::SpearmanRho => Self {
                lower,
                upper: upper_limit,
                lower_open: true,
                upper_open: false,
            },
            _ => Self::closed(lower, upper.min(upper_limit)),
        }
    }

    /// Endpoints after shifting open ends inward by `epsilon`.
    pub fn endpoints(&self, epsilon: f64) -> (f64, f64) {
        let lower = if self.lower_open { self.lower + epsilon } else { self.lower };
        let upper = if self.upper_open { self.upper - epsilon } else { self.upper };
        (lower, upper)
    }
}
