//! Dense row-major path matrix.
//!
//! One row per simulated path, one column per day. Matrices are allocated
//! at their final size up front and written by index; producers never grow
//! them by concatenation.

use serde::{Deserialize, Serialize};

/// A dense `(npaths, ncols)` matrix of f64 values, row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathMatrix {
    data: Vec<f64>,
    npaths: usize,
    ncols: usize,
}

impl PathMatrix {
    /// Create a zero-filled matrix.
    pub fn zeros(npaths: usize, ncols: usize) -> Self {
        Self {
            data: vec![0.0; npaths * ncols],
            npaths,
            ncols,
        }
    }

    /// Create a matrix from a row-major buffer.
    ///
    /// Panics if the buffer length does not equal `npaths * ncols`.
    pub fn from_raw(data: Vec<f64>, npaths: usize, ncols: usize) -> Self {
        assert_eq!(
            data.len(),
            npaths * ncols,
            "buffer length must equal npaths * ncols"
        );
        Self {
            data,
            npaths,
            ncols,
        }
    }

    /// Create a matrix from equal-length rows.
    ///
    /// Panics if the rows have differing lengths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let npaths = rows.len();
        let ncols = rows.first().map(Vec::len).unwrap_or(0);
        let mut data = Vec::with_capacity(npaths * ncols);
        for row in &rows {
            assert_eq!(row.len(), ncols, "all rows must have the same length");
            data.extend_from_slice(row);
        }
        Self {
            data,
            npaths,
            ncols,
        }
    }

    /// Number of paths (rows).
    #[inline]
    pub fn npaths(&self) -> usize {
        self.npaths
    }

    /// Number of columns (days).
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Value at `(path, day)`.
    #[inline]
    pub fn get(&self, path: usize, col: usize) -> f64 {
        self.data[path * self.ncols + col]
    }

    /// One path as a slice.
    #[inline]
    pub fn row(&self, path: usize) -> &[f64] {
        let start = path * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// Iterator over path slices.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.ncols)
    }

    /// The full row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable row-major buffer, for producers filling a preallocated matrix.
    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Elementwise map into a new matrix of the same shape.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
            npaths: self.npaths,
            ncols: self.ncols,
        }
    }

    /// Mean over all cells.
    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return f64::NAN;
        }
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_shape() {
        let m = PathMatrix::zeros(3, 5);
        assert_eq!(m.npaths(), 3);
        assert_eq!(m.ncols(), 5);
        assert_eq!(m.as_slice().len(), 15);
        assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_from_rows_and_access() {
        let m = PathMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(m.get(0, 1), 2.0);
        assert_eq!(m.get(1, 2), 6.0);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.rows().count(), 2);
    }

    #[test]
    fn test_map_preserves_shape() {
        let m = PathMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let doubled = m.map(|x| 2.0 * x);
        assert_eq!(doubled.npaths(), 2);
        assert_eq!(doubled.ncols(), 2);
        assert_eq!(doubled.row(0), &[2.0, 4.0]);
    }

    #[test]
    fn test_mean() {
        let m = PathMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert!((m.mean() - 2.5).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "buffer length")]
    fn test_from_raw_rejects_bad_length() {
        let _ = PathMatrix::from_raw(vec![0.0; 5], 2, 3);
    }
}
