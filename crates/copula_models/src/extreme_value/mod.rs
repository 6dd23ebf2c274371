//! Bivariate extreme-value copulas and their auxiliary distribution.
//!
//! A bivariate extreme-value copula is determined by its Pickands
//! dependence function A: [0, 1] → [1/2, 1], convex, with
//! `max(t, 1 - t) ≤ A(t) ≤ 1`:
//!
//! ```text
//! C(u, v) = exp(ln(uv) · A(ln v / ln(uv)))
//! ```
//!
//! Sampling goes through the auxiliary variable `Z = ln V / ln(UV)`, whose
//! law is [`ExtremeDistribution`].

mod distribution;
mod pickands;

pub use distribution::ExtremeDistribution;
pub use pickands::{extreme_value_cdf, LogisticPickands, PickandsFunction};
