//! Dependence-measure inversion with saturation diagnostics.

use super::{CalibrationConfig, CalibrationDomain, DependenceMeasure};
use crate::archimedean::GeneratorFamily;
use crate::error::CopulaError;
use copula_core::math::solvers::find_root_with_fallback;
use tracing::warn;

/// Which side of the attainable range a target fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Saturation {
    /// Target exceeded the largest attainable value of the measure.
    AboveMaximum,
    /// Target was below the smallest attainable value of the measure.
    BelowMinimum,
}

/// Result of inverting a dependence measure.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Calibrated {
    /// Calibrated parameter θ.
    pub parameter: f64,
    /// Set when the target was unattainable and θ was clamped.
    pub saturation: Option<Saturation>,
}

impl Calibrated {
    fn exact(parameter: f64) -> Self {
        Self {
            parameter,
            saturation: None,
        }
    }

    /// Whether the parameter reproduces the target exactly.
    pub fn is_exact(&self) -> bool {
        self.saturation.is_none()
    }
}

/// Inverts Kendall's tau or Spearman's rho for a generator family.
///
/// # Example
///
/// ```
/// use copula_models::archimedean::GeneratorFamily;
/// use copula_models::calibration::{DependenceCalibrator, DependenceMeasure};
///
/// let calibrator = DependenceCalibrator::default();
/// let fit = calibrator
///     .invert(DependenceMeasure::KendallTau, GeneratorFamily::Gumbel, 0.5)
///     .unwrap();
/// assert_eq!(fit.parameter, 2.0);
/// assert!(fit.is_exact());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DependenceCalibrator {
    config: CalibrationConfig,
}

impl DependenceCalibrator {
    /// Calibrator with the given configuration.
    pub fn new(config: CalibrationConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub fn config(&self) -> &CalibrationConfig {
        &self.config
    }

    /// Parameter θ whose `measure` equals `target`.
    ///
    /// A target of zero maps to the family's independence parameter and a
    /// non-finite target is returned unchanged. Targets outside the
    /// attainable range are clamped to the nearest domain endpoint and
    /// flagged with [`Saturation`].
    ///
    /// # Errors
    ///
    /// [`CopulaError::CalibrationFailed`] if both root-finding methods fail.
    pub fn invert(
        &self,
        measure: DependenceMeasure,
        family: GeneratorFamily,
        target: f64,
    ) -> Result<Calibrated, CopulaError> {
        if !target.is_finite() {
            return Ok(Calibrated::exact(target));
        }
        if target == 0.0 {
            return Ok(Calibrated::exact(family.independence_parameter()));
        }

        let domain = CalibrationDomain::of(family, measure);
        let (mut lo, mut hi) = domain.endpoints(self.config.boundary_epsilon);
        let mut at_lo = family.measure(measure, lo)?;
        let mut at_hi = family.measure(measure, hi)?;
        if at_lo > at_hi {
            std::mem::swap(&mut lo, &mut hi);
            std::mem::swap(&mut at_lo, &mut at_hi);
        }

        if target >= at_hi {
            if target > at_hi {
                warn!(
                    family = family.name(),
                    %measure,
                    target,
                    maximum = at_hi,
                    parameter = hi,
                    "target above attainable range, clamping parameter"
                );
                return Ok(Calibrated {
                    parameter: hi,
                    saturation: Some(Saturation::AboveMaximum),
                });
            }
            return Ok(Calibrated::exact(hi));
        }
        if target <= at_lo {
            if target < at_lo {
                warn!(
                    family = family.name(),
                    %measure,
                    target,
                    minimum = at_lo,
                    parameter = lo,
                    "target below attainable range, clamping parameter"
                );
                return Ok(Calibrated {
                    parameter: lo,
                    saturation: Some(Saturation::BelowMinimum),
                });
            }
            return Ok(Calibrated::exact(lo));
        }

        if let Some(theta) = family.closed_form_inverse(measure, target) {
            return Ok(Calibrated::exact(theta));
        }

        let (a, b) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        find_root_with_fallback(
            |theta| family.measure(measure, theta).map_or(f64::NAN, |v| v - target),
            a,
            b,
            &self.config.solver,
        )
        .map(Calibrated::exact)
        .map_err(|source| CopulaError::CalibrationFailed {
            family: family.name(),
            measure,
            target,
            source,
        })
    }
}

impl GeneratorFamily {
    /// Inverse of Kendall's tau with the default calibrator.
    ///
    /// # Errors
    ///
    /// See [`DependenceCalibrator::invert`].
    pub fn tau_inverse(self, target: f64) -> Result<Calibrated, CopulaError> {
        DependenceCalibrator::default().invert(DependenceMeasure::KendallTau, self, target)
    }

    /// Inverse of Spearman's rho with the default calibrator.
    ///
    /// # Errors
    ///
    /// See [`DependenceCalibrator::invert`].
    pub fn rho_inverse(self, target: f64) -> Result<Calibrated, CopulaError> {
        DependenceCalibrator::default().invert(DependenceMeasure::SpearmanRho, self, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_target_is_independence() {
        for family in GeneratorFamily::ALL {
            let fit = family.tau_inverse(0.0).unwrap();
            assert_eq!(fit.parameter, family.independence_parameter());
            assert!(fit.is_exact());
        }
    }

    #[test]
    fn test_non_finite_target_propagates() {
        let fit = GeneratorFamily::Frank.tau_inverse(f64::NAN).unwrap();
        assert!(fit.parameter.is_nan());
        let fit = GeneratorFamily::Frank.rho_inverse(f64::INFINITY).unwrap();
        assert_eq!(fit.parameter, f64::INFINITY);
    }

    #[test]
    fn test_closed_form_inverses() {
        assert_eq!(GeneratorFamily::Clayton.tau_inverse(0.5).unwrap().parameter, 2.0);
        assert_eq!(GeneratorFamily::Gumbel.tau_inverse(0.5).unwrap().parameter, 2.0);
    }

    #[test]
    fn test_frank_tau_round_trip() {
        for &tau in &[-0.6, -0.1, 0.05, 0.4, 0.8] {
            let fit = GeneratorFamily::Frank.tau_inverse(tau).unwrap();
            assert!(fit.is_exact());
            let back = GeneratorFamily::Frank
                .measure(DependenceMeasure::KendallTau, fit.parameter)
                .unwrap();
            assert_relative_eq!(back, tau, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_joe_tau_round_trip_near_two() {
        let target = GeneratorFamily::Joe
            .measure(DependenceMeasure::KendallTau, 2.0)
            .unwrap();
        let fit = GeneratorFamily::Joe.tau_inverse(target).unwrap();
        assert_relative_eq!(fit.parameter, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_amh_tau_saturation() {
        let fit = GeneratorFamily::Amh.tau_inverse(0.5).unwrap();
        assert_eq!(fit.parameter, 1.0);
        assert_eq!(fit.saturation, Some(Saturation::AboveMaximum));

        let fit = GeneratorFamily::Amh.tau_inverse(-0.5).unwrap();
        assert_eq!(fit.parameter, -1.0);
        assert_eq!(fit.saturation, Some(Saturation::BelowMinimum));
    }

    #[test]
    fn test_amh_rho_round_trip() {
        for &rho in &[-0.25, 0.001, 0.3] {
            let fit = GeneratorFamily::Amh.rho_inverse(rho).unwrap();
            assert!(fit.is_exact());
            let back = GeneratorFamily::Amh
                .measure(DependenceMeasure::SpearmanRho, fit.parameter)
                .unwrap();
            assert_relative_eq!(back, rho, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_gumbel_negative_tau_saturates() {
        let fit = GeneratorFamily::Gumbel.tau_inverse(-0.3).unwrap();
        assert_eq!(fit.parameter, 1.0);
        assert_eq!(fit.saturation, Some(Saturation::BelowMinimum));
    }

    #[test]
    fn test_independence_family_saturates() {
        let fit = GeneratorFamily::Independence.tau_inverse(0.2).unwrap();
        assert_eq!(fit.saturation, Some(Saturation::AboveMaximum));
    }

    #[test]
    fn test_clayton_rho_round_trip() {
        let fit = GeneratorFamily::Clayton.rho_inverse(0.5).unwrap();
        let back = GeneratorFamily::Clayton
            .measure(DependenceMeasure::SpearmanRho, fit.parameter)
            .unwrap();
        assert_relative_eq!(back, 0.5, epsilon = 1e-8);
    }
}
