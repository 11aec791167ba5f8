//! Integration tests for path generation.

use voltarget::{
    GarchConfig, GarchGenerator, NormalGenerator, ReturnPathGenerator, SimulationConfig,
};

fn normal_config(npaths: usize, ndays: usize, seed: u64) -> SimulationConfig {
    SimulationConfig::new(0.05, 0.15, 0.02, 0.10, seed, npaths, ndays, 20)
        .expect("valid config")
}

#[test]
fn test_normal_determinism_per_seed() {
    let a = NormalGenerator::new(normal_config(50, 120, 42)).generate();
    let b = NormalGenerator::new(normal_config(50, 120, 42)).generate();
    assert_eq!(a, b);

    let c = NormalGenerator::new(normal_config(50, 120, 43)).generate();
    assert_ne!(a, c);
}

#[test]
fn test_garch_determinism_per_seed() {
    let base = normal_config(50, 120, 42);
    let config = GarchConfig::new(base, 2e-6, 0.08, 0.90).unwrap();
    let a = GarchGenerator::new(config).generate();
    let b = GarchGenerator::new(config).generate();
    assert_eq!(a, b);
}

#[test]
fn test_return_matrix_shapes() {
    let paths = NormalGenerator::new(normal_config(17, 33, 1)).generate();
    assert_eq!(paths.npaths(), 17);
    assert_eq!(paths.ncols(), 33);

    let config = GarchConfig::new(normal_config(9, 41, 1), 1e-6, 0.05, 0.90).unwrap();
    let paths = GarchGenerator::new(config).generate();
    assert_eq!(paths.npaths(), 9);
    assert_eq!(paths.ncols(), 41);
}

#[test]
fn test_normal_moments_converge_to_daily_parameters() {
    // 2000 x 250 = 500k samples; standard error of the mean is
    // vol_daily / sqrt(n) ~ 8e-7, so 1e-5 is a comfortable bound.
    let cfg = normal_config(2000, 250, 42);
    let paths = NormalGenerator::new(cfg).generate();

    let n = paths.as_slice().len() as f64;
    let mean = paths.as_slice().iter().sum::<f64>() / n;
    let var = paths
        .as_slice()
        .iter()
        .map(|x| (x - mean).powi(2))
        .sum::<f64>()
        / n;

    assert!(
        (mean - cfg.mu()).abs() < 1e-5,
        "sample mean {mean} vs daily mu {}",
        cfg.mu()
    );
    assert!(
        (var.sqrt() - cfg.vol()).abs() < 1e-5,
        "sample std {} vs daily vol {}",
        var.sqrt(),
        cfg.vol()
    );
}

#[test]
fn test_garch_stability_under_stationary_parameters() {
    // alpha + beta < 1 with omega > 0: the conditional variance is mean
    // reverting, so daily returns stay bounded over a long horizon for at
    // least 99% of paths. Unconditional daily std here is
    // sqrt(omega / (1 - alpha - beta)) = 1%.
    let base = SimulationConfig::new(0.05, 0.15, 0.02, 0.10, 42, 200, 5000, 20).unwrap();
    let config = GarchConfig::new(base, 2e-6, 0.08, 0.90).unwrap();
    let paths = GarchGenerator::new(config).generate();

    assert!(paths.as_slice().iter().all(|x| x.is_finite()));

    let bounded = paths
        .rows()
        .filter(|row| row.iter().all(|x| x.abs() < 0.5))
        .count();
    assert!(
        bounded as f64 >= 0.99 * paths.npaths() as f64,
        "only {bounded} of {} paths stayed bounded",
        paths.npaths()
    );
}

#[test]
fn test_garch_conditional_vol_trajectory() {
    let base = normal_config(1, 1000, 7);
    let config = GarchConfig::new(base, 2e-6, 0.08, 0.90).unwrap();
    let generator = GarchGenerator::new(config);

    let sigmas = generator.conditional_vol_path();
    assert_eq!(sigmas.len(), 1000);
    assert!(sigmas.iter().all(|&s| s.is_finite() && s > 0.0));

    // The trajectory is itself deterministic per seed.
    assert_eq!(sigmas, generator.conditional_vol_path());
}
