//! GARCH(1,1) excess-return paths.
//!
//! Conditional variance recursion per path:
//! `sigma_t = sqrt(omega + alpha * (r_{t-1} - mu)^2 + beta * sigma_{t-1}^2)`
//! with both state variables initialized to zero, then `r_t = mu + sigma_t * z_t`
//! with `z_t ~ N(0, 1)`. The zero initial state only seeds the recursion and
//! never appears in the output.
//!
//! The day loop is inherently sequential; parallelism is across paths only,
//! each on its own jump-separated RNG stream.

use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};
use rand_xoshiro::Xoshiro256StarStar;
use rayon::prelude::*;
use tracing::debug;

use super::rng::path_streams;
use super::ReturnPathGenerator;
use crate::core::config::GarchConfig;
use crate::core::matrix::PathMatrix;

/// Generates daily excess returns under GARCH(1,1) conditional variance.
#[derive(Debug, Clone)]
pub struct GarchGenerator {
    config: GarchConfig,
}

impl GarchGenerator {
    /// Create a generator from a validated configuration.
    pub fn new(config: GarchConfig) -> Self {
        Self { config }
    }

    /// The generator's configuration.
    pub fn config(&self) -> &GarchConfig {
        &self.config
    }

    /// Conditional-volatility trajectory of one freshly simulated path.
    ///
    /// Diagnostic output for the plotting collaborator: `ndays` daily sigma
    /// values; labeling by `(alpha, beta)` is the collaborator's concern.
    pub fn conditional_vol_path(&self) -> Vec<f64> {
        let base = self.config.base();
        let mut rng = Xoshiro256StarStar::seed_from_u64(base.seed());
        let mut sigmas = Vec::with_capacity(base.ndays());

        let mut variance = 0.0;
        let mut prev = 0.0;
        for _ in 0..base.ndays() {
            let shock = prev - base.mu();
            let sigma =
                (self.config.omega() + self.config.alpha() * shock * shock
                    + self.config.beta() * variance)
                    .sqrt();
            let z: f64 = StandardNormal.sample(&mut rng);
            prev = base.mu() + sigma * z;
            variance = sigma * sigma;
            sigmas.push(sigma);
        }
        sigmas
    }
}

impl ReturnPathGenerator for GarchGenerator {
    fn generate(&self) -> PathMatrix {
        let base = self.config.base();
        let (npaths, ndays) = (base.npaths(), base.ndays());
        let (mu, omega) = (base.mu(), self.config.omega());
        let (alpha, beta) = (self.config.alpha(), self.config.beta());

        let mut matrix = PathMatrix::zeros(npaths, ndays);
        let streams = path_streams(base.seed(), npaths);

        matrix
            .as_mut_slice()
            .par_chunks_mut(ndays)
            .zip(streams.into_par_iter())
            .for_each(|(row, mut rng)| {
                let mut variance = 0.0;
                let mut prev = 0.0;
                for cell in row.iter_mut() {
                    let shock = prev - mu;
                    let sigma = (omega + alpha * shock * shock + beta * variance).sqrt();
                    let z: f64 = StandardNormal.sample(&mut rng);
                    prev = mu + sigma * z;
                    variance = sigma * sigma;
                    *cell = prev;
                }
            });

        debug!(npaths, ndays, alpha, beta, "generated GARCH excess-return paths");
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimulationConfig;

    fn config(npaths: usize, ndays: usize) -> GarchConfig {
        let base = SimulationConfig::new(0.05, 0.15, 0.02, 0.10, 42, npaths, ndays, 20)
            .expect("valid config");
        GarchConfig::new(base, 2e-6, 0.08, 0.90).expect("valid garch config")
    }

    #[test]
    fn test_shape() {
        let paths = GarchGenerator::new(config(6, 40)).generate();
        assert_eq!(paths.npaths(), 6);
        assert_eq!(paths.ncols(), 40);
    }

    #[test]
    fn test_deterministic_per_seed() {
        let a = GarchGenerator::new(config(8, 60)).generate();
        let b = GarchGenerator::new(config(8, 60)).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_first_day_uses_zero_state() {
        // At t=0 the recursion sees prev=0 and variance=0, so sigma is fully
        // determined by the parameters: sqrt(omega + alpha * mu^2).
        let cfg = config(1, 30);
        let sigmas = GarchGenerator::new(cfg).conditional_vol_path();
        let mu = cfg.base().mu();
        let expected = (cfg.omega() + cfg.alpha() * mu * mu).sqrt();
        assert!((sigmas[0] - expected).abs() < 1e-15);
    }

    #[test]
    fn test_conditional_vol_path_is_positive_and_full_length() {
        let cfg = config(1, 300);
        let sigmas = GarchGenerator::new(cfg).conditional_vol_path();
        assert_eq!(sigmas.len(), 300);
        assert!(sigmas.iter().all(|&s| s.is_finite() && s > 0.0));
    }

    #[test]
    fn test_returns_are_finite_under_stationary_parameters() {
        let paths = GarchGenerator::new(config(32, 500)).generate();
        assert!(paths.as_slice().iter().all(|x| x.is_finite()));
    }
}
