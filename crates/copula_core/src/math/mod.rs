//! Numerical building blocks.
//!
//! - [`solvers`]: bracketed root-finding, fallback chain, quantile inversion
//! - [`quadrature`]: Gauss–Legendre integration
//! - [`special`]: polylogarithm, Debye and gamma-family functions
//! - [`series`]: truncated Taylor-series arithmetic

pub mod quadrature;
pub mod series;
pub mod solvers;
pub mod special;
