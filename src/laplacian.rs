//! Combinatorial graph Laplacian.
//!
//! `L = D − A`, where `D` is the diagonal degree matrix holding the row sums
//! of the adjacency `A`. Two properties the tests lean on:
//!
//! - every row of `L` sums to zero, so 0 is always an eigenvalue
//! - for a symmetric adjacency with nonnegative weights, `L` is positive
//!   semidefinite and 0 is its *smallest* eigenvalue
//!
//! Inputs with negative weights are accepted but carry no such guarantee.
//!
//! All functions here take the adjacency by reference and return fresh
//! matrices; a caller's matrix is never modified.

use crate::error::{Error, Result};
use faer::Mat;

fn require_square(mat: &Mat<f64>) -> Result<usize> {
    if mat.nrows() == 0 || mat.ncols() == 0 {
        return Err(Error::EmptyInput);
    }
    if mat.nrows() != mat.ncols() {
        return Err(Error::ShapeMismatch {
            expected: "square matrix".to_string(),
            actual: format!("{}x{}", mat.nrows(), mat.ncols()),
        });
    }
    Ok(mat.nrows())
}

/// Collapse every strictly positive entry to exactly 1.
///
/// Zero and negative entries pass through unchanged, and already-binary
/// matrices come back equal. This is the unweighted Laplacian's safety net:
/// adjacencies with stray fractional weights still count one edge per
/// positive entry.
pub fn binarize(adj: &Mat<f64>) -> Mat<f64> {
    Mat::from_fn(adj.nrows(), adj.ncols(), |i, j| {
        if adj[(i, j)] > 0.0 {
            1.0
        } else {
            adj[(i, j)]
        }
    })
}

/// Diagonal degree matrix: entry `(i, i)` is the sum of row `i` of the
/// adjacency.
pub fn degree_matrix(adj: &Mat<f64>) -> Mat<f64> {
    let n = adj.nrows();
    let mut deg = Mat::<f64>::zeros(n, n);
    for i in 0..n {
        let mut sum = 0.0;
        for j in 0..adj.ncols() {
            sum += adj[(i, j)];
        }
        deg[(i, i)] = sum;
    }
    deg
}

/// Combinatorial Laplacian `L = D − A`.
///
/// With `weighted` set to false the adjacency is passed through
/// [`binarize`] first, so degrees count edges rather than summing weights.
/// The input matrix itself is left untouched either way.
///
/// # Errors
///
/// `Error::EmptyInput` for a 0×0 matrix, `Error::ShapeMismatch` for
/// non-square input.
pub fn laplacian(adj: &Mat<f64>, weighted: bool) -> Result<Mat<f64>> {
    require_square(adj)?;
    let a = if weighted { adj.clone() } else { binarize(adj) };
    let deg = degree_matrix(&a);
    Ok(&deg - &a)
}
