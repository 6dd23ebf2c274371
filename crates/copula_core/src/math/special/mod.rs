//! Special functions.
//!
//! This is the numerical oracle the generator families lean on:
//! - [`polylog`] / [`polylog_neg`]: polylogarithm `Li_s(x)` for integer `s ≤ 2`
//! - [`debye`]: Debye functions `D_n(x)` (Frank dependence measures)
//! - [`ln_gamma`], [`ln_beta`], [`digamma`]: gamma family (Joe, Sibuya)
//! - [`bernoulli`]: Bernoulli numbers for series expansions

mod debye;
mod gamma;
mod polylog;

pub use debye::{bernoulli, debye, debye_taylor_coefficient, MAX_BERNOULLI_INDEX};
pub use gamma::{digamma, ln_beta, ln_gamma};
pub use polylog::{dilog, eulerian_row, polylog, polylog_neg};
