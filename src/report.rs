//! Human-readable rendering of summary statistics.
//!
//! A pure function of the statistics mapping; printing or displaying the
//! text is the caller's concern.

use crate::engine::SummaryStats;

/// Render the two-strategy comparison as console-style text.
pub fn render_summary(stats: &SummaryStats) -> String {
    let mut out = String::new();
    out.push_str("----- Buy & Hold -----\n");
    out.push_str(&strategy_block(
        stats.aaer_bh,
        stats.aav_bh,
        stats.sharpe_bh,
        stats.wmean_bh,
    ));
    out.push_str("\n----- Vol Target -----\n");
    out.push_str(&strategy_block(
        stats.aaer_vt,
        stats.aav_vt,
        stats.sharpe_vt,
        stats.wmean_vt,
    ));
    out
}

fn strategy_block(aaer: f64, aav: f64, sharpe: f64, wmean: f64) -> String {
    format!(
        "Average excess return: {:.2}%\nAverage volatility: {:.2}%\nSharpe ratio: {:.2}\nAverage exposure: {:.2}%\n",
        aaer * 100.0,
        aav * 100.0,
        sharpe,
        wmean * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_all_fields() {
        let stats = SummaryStats {
            aaer_vt: 0.0432,
            aaer_bh: 0.05,
            aav_vt: 0.1012,
            aav_bh: 0.15,
            sharpe_vt: 0.43,
            sharpe_bh: 0.33,
            wmean_vt: 0.6789,
            wmean_bh: 1.0,
        };
        let text = render_summary(&stats);

        assert!(text.contains("----- Buy & Hold -----"));
        assert!(text.contains("----- Vol Target -----"));
        assert!(text.contains("Average excess return: 5.00%"));
        assert!(text.contains("Average volatility: 10.12%"));
        assert!(text.contains("Sharpe ratio: 0.43"));
        assert!(text.contains("Average exposure: 67.89%"));
        assert!(text.contains("Average exposure: 100.00%"));
    }
}
