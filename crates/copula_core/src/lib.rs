//! # copula_core: Numerical Foundation for Copula Modelling
//!
//! ## Layer 1 (Foundation) Role
//!
//! copula_core is the bottom layer of the workspace and provides the
//! numerical oracle every generator family and calibrator relies upon:
//! - Bracketed root-finding with an explicit fallback chain (`math::solvers`)
//! - Quantiles of continuous distributions by root-finding (`math::solvers::invert_cdf`)
//! - Gauss–Legendre quadrature in one and two dimensions (`math::quadrature`)
//! - Special functions: polylogarithms, Debye functions, gamma family (`math::special`)
//! - Truncated power-series arithmetic for exact derivatives (`math::series`)
//! - Error types: `SolverError`, `RootFindingFailure` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other copula_* crates, with minimal
//! external dependencies:
//! - num-traits: generic floating-point solvers
//! - thiserror: structured errors
//! - tracing: solver fallback diagnostics
//! - serde: configuration serialisation (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use copula_core::math::solvers::{find_root_with_fallback, SolverConfig};
//! use copula_core::math::special::polylog;
//!
//! // Li_1(x) = -ln(1 - x)
//! let li1 = polylog(1, 0.5);
//! assert!((li1 - 2.0_f64.ln()).abs() < 1e-14);
//!
//! // Root of x^2 - 2 on [0, 2]
//! let root = find_root_with_fallback(|x: f64| x * x - 2.0, 0.0, 2.0, &SolverConfig::default())
//!     .unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `SolverConfig` and error types

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
