//! Summary risk/return statistics for the VT and BH strategies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::config::TRADING_DAYS_PER_YEAR;
use crate::core::matrix::PathMatrix;

/// The eight named statistics comparing vol-target (VT) against
/// buy-and-hold (BH).
///
/// Annualized figures are `260 x` the mean of the per-path daily figure.
/// Sharpe ratios are computed per path and then averaged over paths, never
/// as a ratio of averages. Degenerate weights (infinite exposure from a
/// zero volatility estimate) contaminate these aggregates with NaN/inf by
/// design; callers must be prepared for non-finite values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Annualized average excess return of the VT portfolio.
    pub aaer_vt: f64,
    /// Annualized average excess return of buy-and-hold.
    pub aaer_bh: f64,
    /// Annualized average volatility of the VT portfolio.
    pub aav_vt: f64,
    /// Annualized average volatility of buy-and-hold.
    pub aav_bh: f64,
    /// Mean over paths of per-path Sharpe ratio, VT.
    pub sharpe_vt: f64,
    /// Mean over paths of per-path Sharpe ratio, BH.
    pub sharpe_bh: f64,
    /// Mean exposure weight of the VT strategy.
    pub wmean_vt: f64,
    /// Exposure of buy-and-hold, 1.0 by definition.
    pub wmean_bh: f64,
}

impl SummaryStats {
    /// The statistics as a fixed-key mapping for the reporting collaborator.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("AAER_VT", self.aaer_vt),
            ("AAER_BH", self.aaer_bh),
            ("AAV_VT", self.aav_vt),
            ("AAV_BH", self.aav_bh),
            ("Sharpe_VT", self.sharpe_vt),
            ("Sharpe_BH", self.sharpe_bh),
            ("wmean_VT", self.wmean_vt),
            ("wmean_BH", self.wmean_bh),
        ])
    }
}

/// Mean and population standard deviation of a slice.
fn mean_and_std(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// Aggregate the eight summary statistics from the simulation matrices.
///
/// `excess_returns` is the raw BH excess-return matrix; `portfolio_returns`
/// and `weights` are the aligned `(npaths, ndays - window)` VT matrices.
/// `risk_free` is the DAILY risk-free rate.
pub(crate) fn summarize(
    excess_returns: &PathMatrix,
    portfolio_returns: &PathMatrix,
    weights: &PathMatrix,
    risk_free: f64,
) -> SummaryStats {
    let npaths = excess_returns.npaths() as f64;

    let mut sum_excess_vt = 0.0;
    let mut sum_vol_vt = 0.0;
    let mut sum_sharpe_vt = 0.0;
    let mut sum_excess_bh = 0.0;
    let mut sum_vol_bh = 0.0;
    let mut sum_sharpe_bh = 0.0;

    for (vt_row, bh_row) in portfolio_returns.rows().zip(excess_returns.rows()) {
        let (vt_mean, vt_vol) = mean_and_std(vt_row);
        let excess_vt = vt_mean - risk_free;
        sum_excess_vt += excess_vt;
        sum_vol_vt += vt_vol;
        sum_sharpe_vt += excess_vt / vt_vol;

        let (bh_mean, bh_vol) = mean_and_std(bh_row);
        sum_excess_bh += bh_mean;
        sum_vol_bh += bh_vol;
        sum_sharpe_bh += bh_mean / bh_vol;
    }

    SummaryStats {
        aaer_vt: TRADING_DAYS_PER_YEAR * sum_excess_vt / npaths,
        aaer_bh: TRADING_DAYS_PER_YEAR * sum_excess_bh / npaths,
        aav_vt: TRADING_DAYS_PER_YEAR * sum_vol_vt / npaths,
        aav_bh: TRADING_DAYS_PER_YEAR * sum_vol_bh / npaths,
        sharpe_vt: sum_sharpe_vt / npaths,
        sharpe_bh: sum_sharpe_bh / npaths,
        wmean_vt: weights.mean(),
        wmean_bh: 1.0,
    }
}
