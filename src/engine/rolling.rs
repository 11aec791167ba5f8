//! Rolling realized-volatility estimation.

use rayon::prelude::*;

use crate::core::error::{Result, VolTargetError};
use crate::core::matrix::PathMatrix;

/// Rolling realized volatility per path.
///
/// For each path, the population standard deviation over every contiguous
/// window of length `window`, sliding by one day: output column `j` covers
/// input days `[j, j + window)`, giving `ncols - window` estimates per path.
///
/// # Arguments
/// * `returns` - Return matrix, one path per row
/// * `window` - Window length; must be at least 1 and shorter than the row
pub fn rolling_volatility(returns: &PathMatrix, window: usize) -> Result<PathMatrix> {
    if window == 0 {
        return Err(VolTargetError::invalid_parameter("window must be at least 1"));
    }
    let ncols = returns.ncols();
    if window >= ncols {
        return Err(VolTargetError::invalid_config(format!(
            "window ({window}) must be shorter than the series length ({ncols})"
        )));
    }

    let nout = ncols - window;
    let mut out = PathMatrix::zeros(returns.npaths(), nout);

    out.as_mut_slice()
        .par_chunks_mut(nout)
        .enumerate()
        .for_each(|(path, row_out)| {
            let row = returns.row(path);
            for (j, cell) in row_out.iter_mut().enumerate() {
                let win = &row[j..j + window];
                let mean = win.iter().sum::<f64>() / window as f64;
                let variance =
                    win.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / window as f64;
                *cell = variance.sqrt();
            }
        });

    Ok(out)
}
