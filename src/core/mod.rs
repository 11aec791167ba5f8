//! Core types for the vol-target simulator.

pub mod config;
pub mod error;
pub mod matrix;

pub use config::{GarchConfig, SimulationConfig, TRADING_DAYS_PER_YEAR};
pub use error::{Result, VolTargetError};
pub use matrix::PathMatrix;
