//! Vol-target strategy evaluation engine.
//!
//! Consumes a generated excess-return matrix and derives, in order: index
//! returns, rolling realized volatility, exposure weights, the blended VT
//! portfolio return series, and the summary statistics comparing VT against
//! buy-and-hold.

pub mod rolling;
pub mod summary;

pub use rolling::rolling_volatility;
pub use summary::SummaryStats;

use tracing::debug;

use crate::core::config::{GarchConfig, SimulationConfig};
use crate::core::error::{Result, VolTargetError};
use crate::core::matrix::PathMatrix;
use crate::simulate::{GarchGenerator, NormalGenerator, ReturnPathGenerator};

/// One evaluated simulation run.
///
/// All matrices are computed once at construction and never mutated. The
/// volatility, weight, and portfolio matrices have shape
/// `(npaths, ndays - window)`: the first `window` days carry too little
/// history to estimate volatility and are dropped from the portfolio.
#[derive(Debug, Clone)]
pub struct VolTargetRun {
    config: SimulationConfig,
    excess_returns: PathMatrix,
    index_returns: PathMatrix,
    volatility: PathMatrix,
    weights: PathMatrix,
    portfolio_returns: PathMatrix,
}

impl VolTargetRun {
    /// Evaluate the vol-target strategy on a generated excess-return matrix.
    ///
    /// The matrix shape must match the configuration. A zero volatility
    /// estimate yields an infinite weight and a non-finite portfolio cell;
    /// both propagate untouched.
    pub fn new(config: SimulationConfig, excess_returns: PathMatrix) -> Result<Self> {
        if excess_returns.npaths() != config.npaths() {
            return Err(VolTargetError::length_mismatch(
                config.npaths(),
                excess_returns.npaths(),
            ));
        }
        if excess_returns.ncols() != config.ndays() {
            return Err(VolTargetError::length_mismatch(
                config.ndays(),
                excess_returns.ncols(),
            ));
        }

        let risk_free = config.risk_free();
        let window = config.window();

        // Volatility is estimated on the index return series, not on the
        // raw excess returns; the BH benchmark statistics stay on excess.
        let index_returns = excess_returns.map(|x| risk_free + x);
        let volatility = rolling_volatility(&index_returns, window)?;
        let target = config.target_vol();
        let weights = volatility.map(|v| target / v);

        let nout = config.ndays() - window;
        let mut portfolio_returns = PathMatrix::zeros(config.npaths(), nout);
        for path in 0..config.npaths() {
            let index_row = index_returns.row(path);
            let weight_row = weights.row(path);
            let start = path * nout;
            let out = &mut portfolio_returns.as_mut_slice()[start..start + nout];
            for (j, cell) in out.iter_mut().enumerate() {
                let w = weight_row[j];
                *cell = w * index_row[window + j] + risk_free * (1.0 - w);
            }
        }

        debug!(
            npaths = config.npaths(),
            ndays = config.ndays(),
            window,
            "evaluated vol-target run"
        );

        Ok(Self {
            config,
            excess_returns,
            index_returns,
            volatility,
            weights,
            portfolio_returns,
        })
    }

    /// The run's configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Raw daily excess returns, `(npaths, ndays)`.
    pub fn excess_returns(&self) -> &PathMatrix {
        &self.excess_returns
    }

    /// Index returns `risk_free + excess`, `(npaths, ndays)`.
    pub fn index_returns(&self) -> &PathMatrix {
        &self.index_returns
    }

    /// Rolling realized index volatility, `(npaths, ndays - window)`.
    pub fn volatility(&self) -> &PathMatrix {
        &self.volatility
    }

    /// Exposure weights `target_vol / volatility`, `(npaths, ndays - window)`.
    pub fn weights(&self) -> &PathMatrix {
        &self.weights
    }

    /// Blended VT portfolio returns, `(npaths, ndays - window)`.
    pub fn portfolio_returns(&self) -> &PathMatrix {
        &self.portfolio_returns
    }

    /// Spot trajectory of one index path for the plotting collaborator.
    ///
    /// Cumulative product of `1 + index return` starting from `initial`
    /// (conventionally 100), so the result has `ndays + 1` points including
    /// the starting level.
    pub fn index_spot_path(&self, path: usize, initial: f64) -> Result<Vec<f64>> {
        if path >= self.config.npaths() {
            return Err(VolTargetError::path_out_of_bounds(
                path,
                self.config.npaths(),
            ));
        }
        let mut spot = Vec::with_capacity(self.config.ndays() + 1);
        let mut level = initial;
        spot.push(level);
        for &ret in self.index_returns.row(path) {
            level *= 1.0 + ret;
            spot.push(level);
        }
        Ok(spot)
    }

    /// Summary statistics for both strategies.
    pub fn summary(&self) -> SummaryStats {
        summary::summarize(
            &self.excess_returns,
            &self.portfolio_returns,
            &self.weights,
            self.config.risk_free(),
        )
    }
}

/// Generate Normal paths and evaluate the strategy in one step.
pub fn run_normal(config: SimulationConfig) -> Result<VolTargetRun> {
    let paths = NormalGenerator::new(config).generate();
    VolTargetRun::new(config, paths)
}

/// Generate GARCH(1,1) paths and evaluate the strategy in one step.
pub fn run_garch(config: GarchConfig) -> Result<VolTargetRun> {
    let paths = GarchGenerator::new(config).generate();
    VolTargetRun::new(*config.base(), paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimulationConfig {
        SimulationConfig::new(0.05, 0.15, 0.02, 0.10, 42, 4, 30, 5).expect("valid config")
    }

    #[test]
    fn test_rejects_shape_mismatch() {
        let cfg = config();
        let wrong_paths = PathMatrix::zeros(3, 30);
        assert!(VolTargetRun::new(cfg, wrong_paths).is_err());
        let wrong_days = PathMatrix::zeros(4, 29);
        assert!(VolTargetRun::new(cfg, wrong_days).is_err());
    }

    #[test]
    fn test_derived_matrix_shapes() {
        let run = run_normal(config()).unwrap();
        assert_eq!(run.excess_returns().ncols(), 30);
        assert_eq!(run.volatility().ncols(), 25);
        assert_eq!(run.weights().ncols(), 25);
        assert_eq!(run.portfolio_returns().ncols(), 25);
        for m in [run.volatility(), run.weights(), run.portfolio_returns()] {
            assert_eq!(m.npaths(), 4);
        }
    }

    #[test]
    fn test_index_returns_offset_by_risk_free() {
        let run = run_normal(config()).unwrap();
        let r = run.config().risk_free();
        let diff = run.index_returns().get(2, 7) - run.excess_returns().get(2, 7);
        assert!((diff - r).abs() < 1e-15);
    }

    #[test]
    fn test_spot_path_cumulative_product() {
        let cfg = SimulationConfig::new(0.0, 0.15, 0.0, 0.10, 1, 1, 4, 2).unwrap();
        let returns = PathMatrix::from_rows(vec![vec![0.1, -0.5, 1.0, 0.0]]);
        let run = VolTargetRun::new(cfg, returns).unwrap();
        let spot = run.index_spot_path(0, 100.0).unwrap();
        assert_eq!(spot.len(), 5);
        assert!((spot[0] - 100.0).abs() < 1e-12);
        assert!((spot[1] - 110.0).abs() < 1e-12);
        assert!((spot[2] - 55.0).abs() < 1e-12);
        assert!((spot[3] - 110.0).abs() < 1e-12);
        assert!((spot[4] - 110.0).abs() < 1e-12);
    }

    #[test]
    fn test_spot_path_out_of_bounds() {
        let run = run_normal(config()).unwrap();
        assert!(run.index_spot_path(4, 100.0).is_err());
    }
}
