//! Inversion of dependence measures into generator parameters.
//!
//! [`DependenceCalibrator`] turns a target Kendall's tau or Spearman's rho
//! into a parameter θ. Closed-form inverses are used when available;
//! otherwise the forward measure is root-found over a finite truncation of
//! the family's parameter range with the Brent → bisection chain from
//! `copula_core`.
//!
//! Targets the family cannot attain are not errors: the parameter is
//! clamped to the nearest boundary and a [`Saturation`] diagnostic is
//! attached to the result and logged at `warn` level.

mod calibrator;
mod config;
mod fit;
mod measure;

pub use calibrator::{Calibrated, DependenceCalibrator, Saturation};
pub use config::{CalibrationConfig, CalibrationDomain};
pub use fit::{fit_parameter, FittedCopula};
pub use measure::DependenceMeasure;
