//! Simulation configuration.
//!
//! All annualized rates are converted to daily units (divide by 260 trading
//! days) exactly once, at construction. Accessors expose the daily values
//! used throughout the engine.

use serde::{Deserialize, Serialize};

use super::error::{Result, VolTargetError};

/// Trading days per year used for annualized <-> daily conversion.
pub const TRADING_DAYS_PER_YEAR: f64 = 260.0;

/// Immutable parameters of a simulation run.
///
/// Constructed from annualized rates; validation is eager, so any
/// `SimulationConfig` value is safe to simulate from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Daily mean excess return.
    mu: f64,
    /// Daily volatility of the excess return.
    vol: f64,
    /// Daily risk-free rate.
    risk_free: f64,
    /// Daily target volatility.
    target_vol: f64,
    /// Seed for the random-number sub-streams.
    seed: u64,
    /// Number of simulated paths.
    npaths: usize,
    /// Horizon length in days.
    ndays: usize,
    /// Rolling window used to estimate index volatility.
    window: usize,
}

impl SimulationConfig {
    /// Create a configuration from annualized rates.
    ///
    /// # Arguments
    /// * `mu` - Annualized mean excess return
    /// * `vol` - Annualized volatility of the excess return
    /// * `risk_free` - Annualized risk-free rate
    /// * `target_vol` - Annualized target volatility
    /// * `seed` - Random seed
    /// * `npaths` - Number of paths
    /// * `ndays` - Horizon length in days
    /// * `window` - Rolling volatility window, must be shorter than `ndays`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mu: f64,
        vol: f64,
        risk_free: f64,
        target_vol: f64,
        seed: u64,
        npaths: usize,
        ndays: usize,
        window: usize,
    ) -> Result<Self> {
        if npaths == 0 {
            return Err(VolTargetError::invalid_config("npaths must be positive"));
        }
        if ndays == 0 {
            return Err(VolTargetError::invalid_config("ndays must be positive"));
        }
        if window == 0 {
            return Err(VolTargetError::invalid_config("window must be positive"));
        }
        if window >= ndays {
            return Err(VolTargetError::invalid_config(format!(
                "window ({window}) must be shorter than the horizon ({ndays})"
            )));
        }
        for (name, value) in [
            ("mu", mu),
            ("vol", vol),
            ("risk_free", risk_free),
            ("target_vol", target_vol),
        ] {
            if !value.is_finite() {
                return Err(VolTargetError::invalid_config(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if vol < 0.0 {
            return Err(VolTargetError::invalid_config(format!(
                "vol must be non-negative, got {vol}"
            )));
        }

        Ok(Self {
            mu: mu / TRADING_DAYS_PER_YEAR,
            vol: vol / TRADING_DAYS_PER_YEAR,
            risk_free: risk_free / TRADING_DAYS_PER_YEAR,
            target_vol: target_vol / TRADING_DAYS_PER_YEAR,
            seed,
            npaths,
            ndays,
            window,
        })
    }

    /// Daily mean excess return.
    #[inline]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Daily volatility of the excess return.
    #[inline]
    pub fn vol(&self) -> f64 {
        self.vol
    }

    /// Daily risk-free rate.
    #[inline]
    pub fn risk_free(&self) -> f64 {
        self.risk_free
    }

    /// Daily target volatility.
    #[inline]
    pub fn target_vol(&self) -> f64 {
        self.target_vol
    }

    /// Random seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of paths.
    #[inline]
    pub fn npaths(&self) -> usize {
        self.npaths
    }

    /// Horizon length in days.
    #[inline]
    pub fn ndays(&self) -> usize {
        self.ndays
    }

    /// Rolling volatility window.
    #[inline]
    pub fn window(&self) -> usize {
        self.window
    }
}

/// GARCH(1,1) simulation configuration.
///
/// Extends a [`SimulationConfig`] with the conditional-variance recursion
/// parameters. The stationarity condition `alpha + beta < 1` is required
/// for stable paths but intentionally not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GarchConfig {
    base: SimulationConfig,
    /// Long-run variance intercept.
    omega: f64,
    /// ARCH coefficient (weight of the previous squared shock).
    alpha: f64,
    /// GARCH coefficient (weight of the previous variance).
    beta: f64,
}

impl GarchConfig {
    /// Create a GARCH configuration on top of a validated base config.
    pub fn new(base: SimulationConfig, omega: f64, alpha: f64, beta: f64) -> Result<Self> {
        for (name, value) in [("omega", omega), ("alpha", alpha), ("beta", beta)] {
            if !value.is_finite() || value < 0.0 {
                return Err(VolTargetError::invalid_config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(Self {
            base,
            omega,
            alpha,
            beta,
        })
    }

    /// The underlying simulation configuration.
    #[inline]
    pub fn base(&self) -> &SimulationConfig {
        &self.base
    }

    /// Long-run variance intercept.
    #[inline]
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// ARCH coefficient.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// GARCH coefficient.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }
}
