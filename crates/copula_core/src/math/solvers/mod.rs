//! Root-finding solvers for calibration and quantile inversion.
//!
//! ## Available Solvers
//!
//! - [`BrentSolver`]: fast bracketed method (inverse quadratic / secant / bisection)
//! - [`BisectionSolver`]: slow, sign-only bracketed method
//!
//! ## Two-Step Procedure
//!
//! [`find_root_with_fallback`] attempts Brent first and, when it reports an
//! error, retries the same bracket with bisection. Only when both fail is a
//! [`RootFindingFailure`](crate::types::RootFindingFailure) returned; a wrong
//! number is never handed back silently.
//!
//! ## Quantiles
//!
//! [`invert_cdf`] turns any continuous CDF known in closed form into a
//! quantile function by root-finding on a bracket, and
//! [`expand_upper_bracket`] grows an upper bound for distributions on
//! `[0, ∞)`.
//!
//! ## Configuration
//!
//! All solvers use [`SolverConfig`]:
//! - `tolerance`: convergence tolerance (default: 1e-10)
//! - `max_iterations`: maximum iteration count (default: 100)
//!
//! ## Example
//!
//! ```
//! use copula_core::math::solvers::{invert_cdf, SolverConfig};
//!
//! // Median of the unit exponential distribution
//! let cdf = |x: f64| 1.0 - (-x).exp();
//! let median = invert_cdf(cdf, 0.5, 0.0, 50.0, &SolverConfig::default()).unwrap();
//! assert!((median - 2.0_f64.ln()).abs() < 1e-9);
//! ```

mod bisection;
mod brent;
mod config;
mod fallback;

pub use bisection::BisectionSolver;
pub use brent::BrentSolver;
pub use config::SolverConfig;
pub use fallback::{expand_upper_bracket, find_root_with_fallback, invert_cdf};
