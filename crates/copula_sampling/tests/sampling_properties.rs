//! Integration tests: empirical dependence, reproducibility and density
//! evaluation on sampled data.

use approx::assert_relative_eq;
use copula_core::math::solvers::SolverConfig;
use copula_models::archimedean::{
    ArchimedeanCopula, ArchimedeanGenerator, Generator, GeneratorFamily,
};
use copula_models::calibration::{fit_parameter, CalibrationConfig, DependenceMeasure};
use copula_models::empirical::{kendall_tau, spearman_rho};
use copula_models::extreme_value::LogisticPickands;
use copula_sampling::config::SamplerConfig;
use copula_sampling::extreme_value::ExtremeValueSampler;
use copula_sampling::parallel::{batch_log_density, sample_copula};
use copula_sampling::radial::RadialTransform;
use copula_sampling::sampler::ArchimedeanSampler;
use copula_sampling::{CopulaRng, SampleMatrix, SamplingError};
use proptest::prelude::*;

fn config(n_samples: usize, seed: u64) -> SamplerConfig {
    SamplerConfig::builder()
        .n_samples(n_samples)
        .seed(seed)
        .build()
        .unwrap()
}

fn empirical_tau(samples: &SampleMatrix, i: usize, j: usize) -> f64 {
    kendall_tau(&samples.column(i).unwrap(), &samples.column(j).unwrap()).unwrap()
}

#[test]
fn test_gumbel_empirical_tau() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let copula = ArchimedeanCopula::new(ArchimedeanGenerator::gumbel(2.0).unwrap(), 2).unwrap();
    let samples = sample_copula(&copula, &config(10_000, 2024)).unwrap();
    assert_relative_eq!(empirical_tau(&samples, 0, 1), 0.5, epsilon = 0.03);
}

#[test]
fn test_every_pair_shares_the_same_tau() {
    let g = ArchimedeanGenerator::joe(3.0).unwrap();
    let copula = ArchimedeanCopula::new(g, 3).unwrap();
    let samples = sample_copula(&copula, &config(5_000, 1)).unwrap();
    for (i, j) in [(0, 1), (0, 2), (1, 2)] {
        assert_relative_eq!(empirical_tau(&samples, i, j), g.tau(), epsilon = 0.04);
    }
}

#[test]
fn test_negative_dependence_families() {
    for g in [
        ArchimedeanGenerator::frank(-5.0).unwrap(),
        ArchimedeanGenerator::amh(-0.8).unwrap(),
        ArchimedeanGenerator::clayton(-0.4).unwrap(),
    ] {
        let copula = ArchimedeanCopula::new(g, 2).unwrap();
        let samples = sample_copula(&copula, &config(6_000, 99)).unwrap();
        assert_relative_eq!(empirical_tau(&samples, 0, 1), g.tau(), epsilon = 0.04);
    }
}

#[test]
fn test_frank_spearman_rho() {
    let g = ArchimedeanGenerator::frank(4.0).unwrap();
    let copula = ArchimedeanCopula::new(g, 2).unwrap();
    let samples = sample_copula(&copula, &config(6_000, 17)).unwrap();
    let rho = spearman_rho(&samples.column(0).unwrap(), &samples.column(1).unwrap()).unwrap();
    assert_relative_eq!(rho, g.rho(), epsilon = 0.04);
}

#[test]
fn test_williamson_route_matches_frailty_route() {
    let copula = ArchimedeanCopula::new(ArchimedeanGenerator::gumbel(1.5).unwrap(), 3).unwrap();
    let solver = SolverConfig::default();
    let williamson =
        ArchimedeanSampler::with_radial(&copula, RadialTransform::williamson(&copula, solver));
    let samples = williamson.sample(4_000, &mut CopulaRng::from_seed(6)).unwrap();
    assert_relative_eq!(empirical_tau(&samples, 0, 2), 1.0 - 1.0 / 1.5, epsilon = 0.04);
}

#[test]
fn test_reproducible_across_thread_layouts() {
    let copula = ArchimedeanCopula::new(ArchimedeanGenerator::clayton(1.0).unwrap(), 4).unwrap();
    let base = SamplerConfig::builder().n_samples(3_000).seed(5).batch_size(100);

    let a = sample_copula(&copula, &base.clone().parallel_threshold(1).build().unwrap()).unwrap();
    let b = sample_copula(&copula, &base.clone().parallel_threshold(usize::MAX).build().unwrap())
        .unwrap();
    let pool = rayon::ThreadPoolBuilder::new().num_threads(2).build().unwrap();
    let c = pool
        .install(|| sample_copula(&copula, &base.parallel_threshold(1).build().unwrap()))
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(a, c);

    let other = sample_copula(&copula, &config(3_000, 6)).unwrap();
    assert_ne!(a, other);
}

#[test]
fn test_log_density_finite_on_samples() {
    // (generator, dimension, rows); negative parameters go through the radial solver
    let cases = [
        (ArchimedeanGenerator::clayton(3.0).unwrap(), 3, 500),
        (ArchimedeanGenerator::clayton(-0.3).unwrap(), 3, 2_000),
        (ArchimedeanGenerator::gumbel(1.8).unwrap(), 3, 500),
        (ArchimedeanGenerator::gumbel(3.0).unwrap(), 3, 2_000),
        (ArchimedeanGenerator::frank(2.0).unwrap(), 3, 500),
        (ArchimedeanGenerator::frank(-5.0).unwrap(), 2, 2_000),
        (ArchimedeanGenerator::amh(0.6).unwrap(), 3, 500),
        (ArchimedeanGenerator::amh(-0.2).unwrap(), 3, 2_000),
        (ArchimedeanGenerator::joe(5.0).unwrap(), 3, 20_000),
    ];
    for (g, dimension, rows) in cases {
        let copula = ArchimedeanCopula::new(g, dimension).unwrap();
        let samples = sample_copula(&copula, &config(rows, 8)).unwrap();
        assert!(
            samples.as_slice().iter().all(|&u| u > 0.0 && u < 1.0),
            "{:?}({}): sample on the boundary of the unit cube",
            g.family(),
            g.parameter()
        );
        let values = batch_log_density(&copula, &samples).unwrap();
        assert!(
            values.iter().all(|v| v.is_finite()),
            "{:?}({}): non-finite log-density on its own samples",
            g.family(),
            g.parameter()
        );
    }
}

#[test]
fn test_calibrate_then_sample() {
    let fit = fit_parameter(
        GeneratorFamily::Clayton,
        2,
        DependenceMeasure::KendallTau,
        0.4,
        &CalibrationConfig::default(),
    )
    .unwrap();
    let samples = sample_copula(&fit.copula, &config(8_000, 31)).unwrap();
    assert_relative_eq!(empirical_tau(&samples, 0, 1), 0.4, epsilon = 0.03);
}

#[test]
fn test_invalid_config_rejected() {
    assert!(matches!(
        SamplerConfig::builder().n_samples(0).build().map_err(SamplingError::from),
        Err(SamplingError::Config(_))
    ));
    assert!(SamplerConfig::builder()
        .n_samples(10)
        .solver(SolverConfig {
            tolerance: 0.0,
            max_iterations: 10,
        })
        .build()
        .is_err());
}

#[test]
fn test_extreme_value_logistic_tau() {
    let sampler = ExtremeValueSampler::new(LogisticPickands::new(2.0).unwrap());
    let samples = sampler.sample(5_000, &mut CopulaRng::from_seed(12)).unwrap();
    assert_relative_eq!(empirical_tau(&samples, 0, 1), 0.5, epsilon = 0.03);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_samples_inside_unit_cube(theta in 0.2f64..6.0, seed in 0u64..1_000) {
        let copula = ArchimedeanCopula::new(ArchimedeanGenerator::clayton(theta).unwrap(), 3).unwrap();
        let samples = sample_copula(&copula, &config(200, seed)).unwrap();
        prop_assert!(samples.as_slice().iter().all(|&u| (0.0..=1.0).contains(&u)));
    }

    #[test]
    fn test_amh_negative_stays_inside_unit_cube(theta in -0.99f64..-0.01, seed in 0u64..1_000) {
        let copula = ArchimedeanCopula::new(ArchimedeanGenerator::amh(theta).unwrap(), 2).unwrap();
        let samples = sample_copula(&copula, &config(100, seed)).unwrap();
        prop_assert!(samples.as_slice().iter().all(|&u| (0.0..=1.0).contains(&u)));
    }
}
