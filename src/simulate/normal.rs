//! i.i.d. Normal excess-return paths.

use rand_distr::{Distribution, StandardNormal};
use rayon::prelude::*;
use tracing::debug;

use super::rng::path_streams;
use super::ReturnPathGenerator;
use crate::core::config::SimulationConfig;
use crate::core::matrix::PathMatrix;

/// Generates i.i.d. Gaussian daily excess returns with daily mean `mu`
/// and daily standard deviation `vol`.
#[derive(Debug, Clone)]
pub struct NormalGenerator {
    config: SimulationConfig,
}

impl NormalGenerator {
    /// Create a generator from a validated configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The generator's configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

impl ReturnPathGenerator for NormalGenerator {
    fn generate(&self) -> PathMatrix {
        let (mu, vol) = (self.config.mu(), self.config.vol());
        let (npaths, ndays) = (self.config.npaths(), self.config.ndays());

        let mut matrix = PathMatrix::zeros(npaths, ndays);
        let streams = path_streams(self.config.seed(), npaths);

        matrix
            .as_mut_slice()
            .par_chunks_mut(ndays)
            .zip(streams.into_par_iter())
            .for_each(|(row, mut rng)| {
                for cell in row.iter_mut() {
                    let z: f64 = StandardNormal.sample(&mut rng);
                    *cell = mu + vol * z;
                }
            });

        debug!(npaths, ndays, "generated normal excess-return paths");
        matrix
    }
}
