//! Archimedean copula: CDF and log-density.

use super::{ArchimedeanGenerator, Generator};
use crate::error::CopulaError;

/// d-dimensional Archimedean copula `C(u) = φ(Σ φ⁻¹(uᵢ))`.
///
/// Construction checks that the generator is d-monotone, so every value of
/// this type is a valid copula.
///
/// # Example
///
/// ```
/// use copula_models::archimedean::{ArchimedeanCopula, ArchimedeanGenerator};
///
/// let frank = ArchimedeanGenerator::frank(-2.0).unwrap();
/// assert!(ArchimedeanCopula::new(frank, 2).is_ok());
/// assert!(ArchimedeanCopula::new(frank, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchimedeanCopula {
    generator: ArchimedeanGenerator,
    dimension: usize,
}

impl ArchimedeanCopula {
    /// Create a copula of the given dimension.
    ///
    /// # Errors
    ///
    /// - [`CopulaError::InvalidInput`] if `dimension < 2`
    /// - [`CopulaError::UnsupportedDimension`] if the generator is not
    ///   `dimension`-monotone
    pub fn new(generator: ArchimedeanGenerator, dimension: usize) -> Result<Self, CopulaError> {
        check_dimension(&generator, dimension)?;
        Ok(Self {
            generator,
            dimension,
        })
    }

    /// Underlying generator.
    pub fn generator(&self) -> &ArchimedeanGenerator {
        &self.generator
    }

    /// Dimension d.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Copula CDF at `u`; coordinates are clamped to [0, 1].
    ///
    /// # Errors
    ///
    /// [`CopulaError::InvalidInput`] if `u.len()` differs from the dimension.
    pub fn cdf(&self, u: &[f64]) -> Result<f64, CopulaError> {
        self.check_point(u)?;
        let mut s = 0.0;
        for &ui in u {
            let ui = ui.clamp(0.0, 1.0);
            if ui == 0.0 {
                return Ok(0.0);
            }
            s += self.generator.phi_inv(ui);
        }
        Ok(self.generator.phi(s))
    }

    /// Log-density at `u`; `-∞` outside the support.
    ///
    /// # Errors
    ///
    /// [`CopulaError::InvalidInput`] if `u.len()` differs from the dimension.
    pub fn log_density(&self, u: &[f64]) -> Result<f64, CopulaError> {
        self.check_point(u)?;
        log_density(&self.generator, u)
    }

    /// Density at `u`.
    ///
    /// # Errors
    ///
    /// Same as [`log_density`](Self::log_density).
    pub fn density(&self, u: &[f64]) -> Result<f64, CopulaError> {
        self.log_density(u).map(f64::exp)
    }

    /// Kendall's tau of the bivariate margins.
    pub fn kendall_tau(&self) -> f64 {
        self.generator.tau()
    }

    /// Spearman's rho of the bivariate margins.
    pub fn spearman_rho(&self) -> f64 {
        self.generator.rho()
    }

    fn check_point(&self, u: &[f64]) -> Result<(), CopulaError> {
        if u.len() != self.dimension {
            return Err(CopulaError::invalid_input(format!(
                "expected a point of dimension {}, got {}",
                self.dimension,
                u.len()
            )));
        }
        Ok(())
    }
}

/// Log-density of the Archimedean copula generated by `generator` at `u`.
///
/// ```text
/// log c(u) = log((-1)^d φ^(d)(Σ φ⁻¹(uᵢ))) + Σ log(-(φ⁻¹)'(uᵢ))
/// ```
///
/// Points with a coordinate outside (0, 1], or where the d-th derivative
/// vanishes, lie outside the support and give `-∞`. So do corner points
/// such as `(1, …, 1)` where the derivative blows up while the Jacobian
/// vanishes.
///
/// # Errors
///
/// - [`CopulaError::InvalidInput`] if `u` has fewer than two coordinates or
///   contains NaN
/// - [`CopulaError::UnsupportedDimension`] if the generator is not
///   `u.len()`-monotone
pub fn log_density<G: Generator + ?Sized>(generator: &G, u: &[f64]) -> Result<f64, CopulaError> {
    let d = u.len();
    check_dimension(generator, d)?;
    if u.iter().any(|x| x.is_nan()) {
        return Err(CopulaError::invalid_input("point contains NaN"));
    }
    if u.iter().any(|&x| x <= 0.0 || x > 1.0) {
        return Ok(f64::NEG_INFINITY);
    }

    let mut s = 0.0;
    let mut log_jacobian = 0.0;
    for &ui in u {
        s += generator.phi_inv(ui);
        log_jacobian += (-generator.phi_inv_derivative(ui)).ln();
    }

    let derivative = generator.phi_derivative(s, d);
    let signed = if d % 2 == 0 { derivative } else { -derivative };
    if !(signed > 0.0) {
        return Ok(f64::NEG_INFINITY);
    }
    let value = signed.ln() + log_jacobian;
    Ok(if value.is_nan() { f64::NEG_INFINITY } else { value })
}

fn check_dimension<G: Generator + ?Sized>(generator: &G, dimension: usize) -> Result<(), CopulaError> {
    if dimension < 2 {
        return Err(CopulaError::invalid_input(format!(
            "copula dimension must be at least 2, got {dimension}"
        )));
    }
    let max_monotony = generator.max_monotony();
    if !max_monotony.supports(dimension) {
        return Err(CopulaError::UnsupportedDimension {
            family: generator.family().name(),
            dimension,
            max_monotony,
        });
    }
    Ok(())
}
