//! Family identifiers, smart constructors and closed-form measures.

use super::{
    amh, clayton, frank, gumbel, joe, AmhGenerator, ArchimedeanGenerator, ClaytonGenerator,
    FrankGenerator, Generator, GumbelGenerator, JoeGenerator,
};
use super::frank::FRANK_MAX_ABS_THETA;
use crate::calibration::DependenceMeasure;
use crate::error::CopulaError;
use std::fmt;

/// Archimedean generator family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeneratorFamily {
    /// φ(t) = e^{-t}
    Independence,
    /// φ(t) = (1 + θt)₊^{-1/θ}
    Clayton,
    /// φ(t) = exp(-t^{1/θ})
    Gumbel,
    /// φ(t) = -ln(1 - (1 - e^{-θ}) e^{-t}) / θ
    Frank,
    /// φ(t) = 1 - (1 - e^{-t})^{1/θ}
    Joe,
    /// φ(t) = (1 - θ) / (e^t - θ)
    Amh,
}

impl GeneratorFamily {
    /// Every family, in declaration order.
    pub const ALL: [GeneratorFamily; 6] = [
        GeneratorFamily::Independence,
        GeneratorFamily::Clayton,
        GeneratorFamily::Gumbel,
        GeneratorFamily::Frank,
        GeneratorFamily::Joe,
        GeneratorFamily::Amh,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            GeneratorFamily::Independence => "Independence",
            GeneratorFamily::Clayton => "Clayton",
            GeneratorFamily::Gumbel => "Gumbel",
            GeneratorFamily::Frank => "Frank",
            GeneratorFamily::Joe => "Joe",
            GeneratorFamily::Amh => "AMH",
        }
    }

    /// Parameter value at which the family reduces to independence.
    pub fn independence_parameter(self) -> f64 {
        match self {
            GeneratorFamily::Gumbel | GeneratorFamily::Joe => 1.0,
            _ => 0.0,
        }
    }

    /// Closed admissible parameter interval, including specialisation values.
    pub fn parameter_range(self) -> (f64, f64) {
        match self {
            GeneratorFamily::Independence => (0.0, 0.0),
            GeneratorFamily::Clayton => (-1.0, f64::INFINITY),
            GeneratorFamily::Gumbel | GeneratorFamily::Joe => (1.0, f64::INFINITY),
            GeneratorFamily::Frank => (-FRANK_MAX_ABS_THETA, FRANK_MAX_ABS_THETA),
            GeneratorFamily::Amh => (-1.0, 1.0),
        }
    }

    /// Smart constructor.
    ///
    /// Parameters at which the family degenerates return the specialised
    /// generator: independence at [`independence_parameter`](Self::independence_parameter)
    /// and Clayton(1) for AMH at θ = 1.
    ///
    /// # Errors
    ///
    /// [`CopulaError::InvalidParameter`] if θ is outside the admissible range.
    pub fn build(self, theta: f64) -> Result<ArchimedeanGenerator, CopulaError> {
        if self != GeneratorFamily::Independence && theta == self.independence_parameter() {
            return Ok(ArchimedeanGenerator::Independence(Default::default()));
        }
        match self {
            GeneratorFamily::Independence => Ok(ArchimedeanGenerator::Independence(Default::default())),
            GeneratorFamily::Clayton => ClaytonGenerator::new(theta).map(ArchimedeanGenerator::Clayton),
            GeneratorFamily::Gumbel => GumbelGenerator::new(theta).map(ArchimedeanGenerator::Gumbel),
            GeneratorFamily::Frank => FrankGenerator::new(theta).map(ArchimedeanGenerator::Frank),
            GeneratorFamily::Joe => JoeGenerator::new(theta).map(ArchimedeanGenerator::Joe),
            GeneratorFamily::Amh if theta == 1.0 => {
                ClaytonGenerator::new(1.0).map(ArchimedeanGenerator::Clayton)
            }
            GeneratorFamily::Amh => AmhGenerator::new(theta).map(ArchimedeanGenerator::Amh),
        }
    }

    /// Value of a dependence measure at parameter θ.
    ///
    /// Closed forms are used where the family has one; otherwise the
    /// generator is built and integrated numerically.
    ///
    /// # Errors
    ///
    /// [`CopulaError::InvalidParameter`] if θ is outside the admissible range.
    pub fn measure(self, measure: DependenceMeasure, theta: f64) -> Result<f64, CopulaError> {
        self.check_range(theta)?;
        let value = match (self, measure) {
            (GeneratorFamily::Independence, _) => 0.0,
            (GeneratorFamily::Clayton, DependenceMeasure::KendallTau) => clayton::kendall_tau(theta),
            (GeneratorFamily::Gumbel, DependenceMeasure::KendallTau) => gumbel::kendall_tau(theta),
            (GeneratorFamily::Frank, DependenceMeasure::KendallTau) => frank::kendall_tau(theta),
            (GeneratorFamily::Frank, DependenceMeasure::SpearmanRho) => frank::spearman_rho(theta),
            (GeneratorFamily::Joe, DependenceMeasure::KendallTau) => joe::kendall_tau(theta),
            (GeneratorFamily::Amh, DependenceMeasure::KendallTau) => amh::kendall_tau(theta),
            (GeneratorFamily::Amh, DependenceMeasure::SpearmanRho) => amh::spearman_rho(theta),
            (_, DependenceMeasure::SpearmanRho) => self.build(theta)?.rho(),
        };
        Ok(value)
    }

    /// Closed-form inverse of a dependence measure, when the family has one.
    ///
    /// The returned value is not checked against the parameter range.
    pub fn closed_form_inverse(self, measure: DependenceMeasure, target: f64) -> Option<f64> {
        match (self, measure) {
            (GeneratorFamily::Clayton, DependenceMeasure::KendallTau) => {
                Some(clayton::kendall_tau_inverse(target))
            }
            (GeneratorFamily::Gumbel, DependenceMeasure::KendallTau) => {
                Some(gumbel::kendall_tau_inverse(target))
            }
            _ => None,
        }
    }

    fn check_range(self, theta: f64) -> Result<(), CopulaError> {
        if self == GeneratorFamily::Independence {
            return Ok(());
        }
        let (lo, hi) = self.parameter_range();
        if theta.is_nan() || theta < lo || theta > hi || theta.is_infinite() {
            return Err(CopulaError::invalid_parameter(
                self.name(),
                theta,
                format!("θ must be finite and in [{lo}, {hi}]"),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for GeneratorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_independence_specialisations() {
        for family in GeneratorFamily::ALL {
            let generator = family.build(family.independence_parameter()).unwrap();
            assert!(
                matches!(generator, ArchimedeanGenerator::Independence(_)),
                "{family} did not specialise"
            );
        }
    }

    #[test]
    fn test_amh_one_is_clayton_one() {
        let generator = GeneratorFamily::Amh.build(1.0).unwrap();
        match generator {
            ArchimedeanGenerator::Clayton(g) => assert_eq!(g.theta(), 1.0),
            other => panic!("expected Clayton(1), got {other:?}"),
        }
    }

    #[test]
    fn test_build_rejects_out_of_range() {
        assert!(GeneratorFamily::Clayton.build(-2.0).is_err());
        assert!(GeneratorFamily::Gumbel.build(0.5).is_err());
        assert!(GeneratorFamily::Joe.build(f64::NAN).is_err());
        assert!(GeneratorFamily::Amh.build(1.5).is_err());
        assert!(GeneratorFamily::Frank.build(1e4).is_err());
    }

    #[test]
    fn test_measure_at_independence_is_zero() {
        for family in GeneratorFamily::ALL {
            for measure in [DependenceMeasure::KendallTau, DependenceMeasure::SpearmanRho] {
                let value = family.measure(measure, family.independence_parameter()).unwrap();
                assert_relative_eq!(value, 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_measure_rejects_out_of_range() {
        assert!(GeneratorFamily::Gumbel
            .measure(DependenceMeasure::KendallTau, 0.9)
            .is_err());
        assert!(GeneratorFamily::Amh
            .measure(DependenceMeasure::SpearmanRho, -1.1)
            .is_err());
    }

    #[test]
    fn test_measure_agrees_with_generator() {
        let g = GeneratorFamily::Clayton.build(2.0).unwrap();
        assert_relative_eq!(
            GeneratorFamily::Clayton
                .measure(DependenceMeasure::SpearmanRho, 2.0)
                .unwrap(),
            g.rho()
        );
        assert_relative_eq!(
            GeneratorFamily::Clayton
                .measure(DependenceMeasure::KendallTau, 2.0)
                .unwrap(),
            0.5
        );
    }
}
