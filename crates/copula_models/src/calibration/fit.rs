//! Method-of-moments fit of an Archimedean copula.

use super::{Calibrated, CalibrationConfig, DependenceCalibrator, DependenceMeasure};
use crate::archimedean::{ArchimedeanCopula, GeneratorFamily};
use crate::error::CopulaError;
use tracing::info;

/// Copula fitted to a dependence measure, with the calibration diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedCopula {
    /// Copula built from the calibrated parameter.
    pub copula: ArchimedeanCopula,
    /// Calibrated parameter and saturation flag.
    pub calibration: Calibrated,
}

/// Fit `family` in `dimension` dimensions so that its `measure` equals `target`.
///
/// # Errors
///
/// - [`CopulaError::InvalidInput`] if `target` is not finite
/// - [`CopulaError::CalibrationFailed`] if root-finding fails
/// - [`CopulaError::UnsupportedDimension`] if the calibrated generator is
///   not `dimension`-monotone (e.g. a negative Frank parameter with d > 2)
///
/// # Example
///
/// ```
/// use copula_models::archimedean::GeneratorFamily;
/// use copula_models::calibration::{fit_parameter, CalibrationConfig, DependenceMeasure};
///
/// let fit = fit_parameter(
///     GeneratorFamily::Clayton,
///     3,
///     DependenceMeasure::KendallTau,
///     0.5,
///     &CalibrationConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(fit.calibration.parameter, 2.0);
/// assert_eq!(fit.copula.dimension(), 3);
/// ```
pub fn fit_parameter(
    family: GeneratorFamily,
    dimension: usize,
    measure: DependenceMeasure,
    target: f64,
    config: &CalibrationConfig,
) -> Result<FittedCopula, CopulaError> {
    if !target.is_finite() {
        return Err(CopulaError::invalid_input(format!(
            "{measure} target must be finite, got {target}"
        )));
    }
    let calibration = DependenceCalibrator::new(*config).invert(measure, family, target)?;
    let generator = family.build(calibration.parameter)?;
    let copula = ArchimedeanCopula::new(generator, dimension)?;

    info!(
        family = family.name(),
        dimension,
        %measure,
        target,
        parameter = calibration.parameter,
        saturated = calibration.saturation.is_some(),
        "fitted Archimedean copula"
    );

    Ok(FittedCopula {
        copula,
        calibration,
    })
}
