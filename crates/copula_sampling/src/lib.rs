//! # copula_sampling (L3: Sampling Engine)
//!
//! Random generation from the copulas of `copula_models`.
//!
//! - [`CopulaRng`](rng::CopulaRng): seeded, reproducible PRNG wrapper
//! - [`FrailtySampler`](frailty::FrailtySampler): draws from the mixing laws
//!   whose Laplace transforms are the generators
//! - [`RadialTransform`](radial::RadialTransform): frailty route when the
//!   generator has one, Williamson d-transform inversion otherwise
//! - [`ArchimedeanSampler`](sampler::ArchimedeanSampler): one-thread sampler
//! - [`sample_copula`](parallel::sample_copula) and
//!   [`batch_log_density`](parallel::batch_log_density): Rayon batch
//!   versions with per-batch seeding, so output does not depend on the
//!   number of threads
//! - [`ExtremeValueSampler`](extreme_value::ExtremeValueSampler): two-stage
//!   sampler for bivariate extreme-value copulas
//!
//! ## Example
//!
//! ```
//! use copula_models::archimedean::{ArchimedeanCopula, ArchimedeanGenerator};
//! use copula_sampling::config::SamplerConfig;
//! use copula_sampling::parallel::sample_copula;
//!
//! let copula = ArchimedeanCopula::new(ArchimedeanGenerator::clayton(2.0).unwrap(), 3).unwrap();
//! let config = SamplerConfig::builder().n_samples(1_000).seed(7).build().unwrap();
//! let samples = sample_copula(&copula, &config).unwrap();
//!
//! assert_eq!(samples.n_rows(), 1_000);
//! assert!(samples.as_slice().iter().all(|&u| (0.0..=1.0).contains(&u)));
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod extreme_value;
pub mod frailty;
pub mod matrix;
pub mod parallel;
pub mod radial;
pub mod rng;
pub mod sampler;

pub use error::{ConfigError, SamplingError};
pub use matrix::SampleMatrix;
pub use rng::CopulaRng;
