//! Static dispatch enum over the generator families.

use super::{
    AmhGenerator, ClaytonGenerator, Frailty, FrankGenerator, Generator, GeneratorFamily,
    GumbelGenerator, IndependenceGenerator, JoeGenerator, Monotony,
};
use crate::error::CopulaError;
use crate::extreme_value::LogisticPickands;

/// Any supported Archimedean generator.
///
/// Construct through the smart constructors below (or
/// [`GeneratorFamily::build`]) so that degenerate parameters are normalised
/// to their specialised variant.
///
/// # Example
///
/// ```
/// use copula_models::archimedean::{ArchimedeanGenerator, Generator};
///
/// let amh = ArchimedeanGenerator::amh(0.0).unwrap();
/// assert!(matches!(amh, ArchimedeanGenerator::Independence(_)));
///
/// let frank = ArchimedeanGenerator::frank(4.0).unwrap();
/// assert!(frank.tau() > 0.3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArchimedeanGenerator {
    /// Independence generator
    Independence(IndependenceGenerator),
    /// Clayton generator
    Clayton(ClaytonGenerator),
    /// Gumbel generator
    Gumbel(GumbelGenerator),
    /// Frank generator
    Frank(FrankGenerator),
    /// Joe generator
    Joe(JoeGenerator),
    /// Ali–Mikhail–Haq generator
    Amh(AmhGenerator),
}

impl ArchimedeanGenerator {
    /// Independence generator.
    pub fn independence() -> Self {
        ArchimedeanGenerator::Independence(IndependenceGenerator)
    }

    /// Clayton generator; θ = 0 yields independence.
    ///
    /// # Errors
    ///
    /// [`CopulaError::InvalidParameter`] unless θ is finite and ≥ -1.
    pub fn clayton(theta: f64) -> Result<Self, CopulaError> {
        GeneratorFamily::Clayton.build(theta)
    }

    /// Gumbel generator; θ = 1 yields independence.
    ///
    /// # Errors
    ///
    /// [`CopulaError::InvalidParameter`] unless θ is finite and ≥ 1.
    pub fn gumbel(theta: f64) -> Result<Self, CopulaError> {
        GeneratorFamily::Gumbel.build(theta)
    }

    /// Frank generator; θ = 0 yields independence.
    ///
    /// # Errors
    ///
    /// [`CopulaError::InvalidParameter`] if θ is NaN or too large in magnitude.
    pub fn frank(theta: f64) -> Result<Self, CopulaError> {
        GeneratorFamily::Frank.build(theta)
    }

    /// Joe generator; θ = 1 yields independence.
    ///
    /// # Errors
    ///
    /// [`CopulaError::InvalidParameter`] unless θ is finite and ≥ 1.
    pub fn joe(theta: f64) -> Result<Self, CopulaError> {
        GeneratorFamily::Joe.build(theta)
    }

    /// Ali–Mikhail–Haq generator; θ = 0 yields independence and θ = 1
    /// yields Clayton(1).
    ///
    /// # Errors
    ///
    /// [`CopulaError::InvalidParameter`] unless θ ∈ [-1, 1].
    pub fn amh(theta: f64) -> Result<Self, CopulaError> {
        GeneratorFamily::Amh.build(theta)
    }

    /// Borrow the wrapped generator as a trait object.
    pub fn as_generator(&self) -> &dyn Generator {
        match self {
            ArchimedeanGenerator::Independence(g) => g,
            ArchimedeanGenerator::Clayton(g) => g,
            ArchimedeanGenerator::Gumbel(g) => g,
            ArchimedeanGenerator::Frank(g) => g,
            ArchimedeanGenerator::Joe(g) => g,
            ArchimedeanGenerator::Amh(g) => g,
        }
    }

    /// Pickands function of the extreme-value copula in the same family.
    ///
    /// Only the Gumbel family is both Archimedean and extreme-value.
    pub fn pickands(&self) -> Option<LogisticPickands> {
        match self {
            ArchimedeanGenerator::Gumbel(g) => Some(g.pickands()),
            _ => None,
        }
    }
}

impl Default for ArchimedeanGenerator {
    fn default() -> Self {
        Self::independence()
    }
}

impl Generator for ArchimedeanGenerator {
    fn family(&self) -> GeneratorFamily {
        self.as_generator().family()
    }

    fn parameter(&self) -> f64 {
        self.as_generator().parameter()
    }

    #[inline]
    fn phi(&self, t: f64) -> f64 {
        self.as_generator().phi(t)
    }

    #[inline]
    fn phi_inv(&self, u: f64) -> f64 {
        self.as_generator().phi_inv(u)
    }

    #[inline]
    fn phi_derivative(&self, t: f64, k: usize) -> f64 {
        self.as_generator().phi_derivative(t, k)
    }

    #[inline]
    fn phi_inv_derivative(&self, u: f64) -> f64 {
        self.as_generator().phi_inv_derivative(u)
    }

    fn max_monotony(&self) -> Monotony {
        self.as_generator().max_monotony()
    }

    fn tau(&self) -> f64 {
        self.as_generator().tau()
    }

    fn rho(&self) -> f64 {
        self.as_generator().rho()
    }

    fn frailty(&self) -> Option<Frailty> {
        self.as_generator().frailty()
    }
}
