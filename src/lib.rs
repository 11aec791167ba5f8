//! Monte Carlo simulation engine for volatility-targeting overlay strategies.
//!
//! This crate simulates batches of daily excess-return paths under two
//! stochastic return models and evaluates a vol-targeting (VT) overlay
//! against a buy-and-hold (BH) benchmark:
//!
//! - Path generation: i.i.d. Normal or GARCH(1,1) conditional variance,
//!   deterministic per seed, parallel across paths.
//! - Rolling realized-volatility estimation over a sliding window.
//! - Dynamic exposure weight `target_vol / volatility` and blended
//!   portfolio returns.
//! - Eight named summary statistics comparing VT and BH.
//!
//! ```
//! use voltarget::{run_normal, SimulationConfig};
//!
//! let config = SimulationConfig::new(0.05, 0.15, 0.02, 0.10, 42, 200, 260, 20)?;
//! let run = run_normal(config)?;
//! let stats = run.summary();
//! assert!(stats.aav_vt.is_finite());
//! # Ok::<(), voltarget::VolTargetError>(())
//! ```

pub mod core;
pub mod engine;
pub mod report;
pub mod simulate;

pub use crate::core::{
    GarchConfig, PathMatrix, Result, SimulationConfig, VolTargetError, TRADING_DAYS_PER_YEAR,
};
pub use crate::engine::{run_garch, run_normal, rolling_volatility, SummaryStats, VolTargetRun};
pub use crate::report::render_summary;
pub use crate::simulate::{GarchGenerator, NormalGenerator, ReturnPathGenerator};
