//! Eigenvalue spectra.
//!
//! The ascending-sorted Laplacian spectrum is the fingerprint this crate
//! clusters graphs by. It is invariant under node relabeling, so isomorphic
//! graphs always share a spectrum; the converse does not hold (cospectral
//! non-isomorphic graphs exist), which is acceptable for similarity grouping.
//!
//! # Solver Strategy
//!
//! Laplacians of symmetric adjacencies are self-adjoint, so the primary path
//! is faer's self-adjoint eigensolver: real output by construction, nothing
//! imaginary to discard. If it reports a failure, the general eigensolver
//! runs as a fallback and the real parts are kept. Only when both paths fail
//! does [`spectrum`] return `Error::NonConvergence`.

use crate::error::{Error, Result};
use faer::{Mat, Side};

/// Magnitude below which [`round_near_zero`] snaps an eigenvalue to 0.
pub const DEFAULT_ZERO_TOL: f64 = 1e-8;

/// Eigenvalues of a square matrix, sorted ascending.
///
/// # Errors
///
/// `Error::EmptyInput` for a 0×0 matrix, `Error::ShapeMismatch` for
/// non-square input, `Error::NonConvergence` if both the self-adjoint and
/// the general solver fail.
pub fn spectrum(mat: &Mat<f64>) -> Result<Vec<f64>> {
    if mat.nrows() == 0 || mat.ncols() == 0 {
        return Err(Error::EmptyInput);
    }
    if mat.nrows() != mat.ncols() {
        return Err(Error::ShapeMismatch {
            expected: "square matrix".to_string(),
            actual: format!("{}x{}", mat.nrows(), mat.ncols()),
        });
    }

    let mut eigs = match mat.as_ref().self_adjoint_eigenvalues(Side::Lower) {
        Ok(eigs) => eigs,
        Err(sym_err) => mat
            .as_ref()
            .eigenvalues()
            .map_err(|gen_err| Error::NonConvergence {
                details: format!("self-adjoint: {sym_err:?}; general: {gen_err:?}"),
            })?
            .into_iter()
            .map(|z| z.re)
            .collect::<Vec<f64>>(),
    };

    eigs.sort_by(|a, b| a.total_cmp(b));
    Ok(eigs)
}

/// Snap eigenvalues within `tol` of zero to exactly 0, preserving order.
///
/// Solvers report the null eigenvalue of a Laplacian as something like
/// `-3.2e-16`; snapping makes spectra comparable across runs. Values with
/// magnitude equal to `tol` are kept as-is.
pub fn round_near_zero(spectrum: &[f64], tol: f64) -> Vec<f64> {
    spectrum
        .iter()
        .map(|&x| if x.abs() < tol { 0.0 } else { x })
        .collect()
}
