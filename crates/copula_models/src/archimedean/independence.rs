//! Independence generator φ(t) = e^{-t}.

use super::{Frailty, Generator, GeneratorFamily, Monotony};

/// Generator of the independence copula Π(u) = ∏ uᵢ.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndependenceGenerator;

impl Generator for IndependenceGenerator {
    fn family(&self) -> GeneratorFamily {
        GeneratorFamily::Independence
    }

    fn parameter(&self) -> f64 {
        0.0
    }

    fn phi(&self, t: f64) -> f64 {
        (-t).exp()
    }

    fn phi_inv(&self, u: f64) -> f64 {
        -u.ln()
    }

    fn phi_derivative(&self, t: f64, k: usize) -> f64 {
        let value = (-t).exp();
        if k % 2 == 0 {
            value
        } else {
            -value
        }
    }

    fn phi_inv_derivative(&self, u: f64) -> f64 {
        -1.0 / u
    }

    fn max_monotony(&self) -> Monotony {
        Monotony::Infinite
    }

    fn tau(&self) -> f64 {
        0.0
    }

    fn rho(&self) -> f64 {
        0.0
    }

    fn frailty(&self) -> Option<Frailty> {
        Some(Frailty::Dirac { value: 1.0 })
    }
}
