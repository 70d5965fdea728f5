//! Random graph generation.
//!
//! Produces the symmetric adjacency matrices the rest of the pipeline
//! consumes, in two flavors: weighted (real edge weights) and unweighted
//! (0/1 edges obtained by thresholding the same random draw).
//!
//! # Construction
//!
//! 1. Draw an n×n matrix of uniform [0, 1) entries
//! 2. Symmetrize: `A = (M + Mᵀ) / 2`
//! 3. Unweighted only: entries at or above the threshold become 1, the rest 0
//! 4. Clear the diagonal (no self-loops)
//!
//! Thresholding runs before the diagonal is cleared, so the zero-diagonal
//! contract holds for any threshold, including thresholds at or below 0.
//!
//! # Randomness
//!
//! Every draw comes from a caller-supplied `&mut impl Rng`. Seed a `StdRng`
//! to make a whole survey reproducible:
//!
//! ```rust
//! use lapspec::GraphGenerator;
//! use rand::prelude::*;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let adj = GraphGenerator::new(5).unweighted_adjacency(&mut rng)?;
//! assert_eq!(adj.nrows(), 5);
//! # Ok::<(), lapspec::Error>(())
//! ```

use crate::error::{Error, Result};
use faer::Mat;
use rand::Rng;

/// Default cutoff for the unweighted variant: symmetrized entries at or
/// above it become edges.
pub const DEFAULT_EDGE_THRESHOLD: f64 = 0.5;

/// Random symmetric adjacency matrix generator.
#[derive(Debug, Clone)]
pub struct GraphGenerator {
    /// Number of nodes.
    n: usize,
    /// Binarization cutoff for the unweighted variant.
    threshold: f64,
}

impl GraphGenerator {
    /// Create a generator for graphs on `n` nodes.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            threshold: DEFAULT_EDGE_THRESHOLD,
        }
    }

    /// Set the edge threshold used by [`unweighted_adjacency`](Self::unweighted_adjacency).
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(Error::InvalidParameter {
                name: "n",
                message: "node count must be positive",
            });
        }
        if !self.threshold.is_finite() {
            return Err(Error::InvalidParameter {
                name: "threshold",
                message: "edge threshold must be finite",
            });
        }
        Ok(())
    }

    /// Symmetrized uniform draw, before thresholding or diagonal clearing.
    fn symmetric_uniform(&self, rng: &mut impl Rng) -> Mat<f64> {
        let n = self.n;
        let raw = Mat::from_fn(n, n, |_, _| rng.random::<f64>());
        Mat::from_fn(n, n, |i, j| 0.5 * (raw[(i, j)] + raw[(j, i)]))
    }

    /// Weighted random adjacency: symmetric, zero diagonal, off-diagonal
    /// entries in [0, 1).
    ///
    /// # Errors
    ///
    /// `Error::InvalidParameter` if the node count is zero or the threshold
    /// is not finite.
    pub fn weighted_adjacency(&self, rng: &mut impl Rng) -> Result<Mat<f64>> {
        self.validate()?;
        let mut adj = self.symmetric_uniform(rng);
        clear_diagonal(&mut adj);
        Ok(adj)
    }

    /// Unweighted random adjacency: symmetric 0/1 matrix with zero diagonal.
    ///
    /// Symmetrized entries at or above the configured threshold become 1,
    /// the rest 0. The expected edge density at the default threshold is
    /// roughly one half.
    ///
    /// # Errors
    ///
    /// `Error::InvalidParameter` if the node count is zero or the threshold
    /// is not finite.
    pub fn unweighted_adjacency(&self, rng: &mut impl Rng) -> Result<Mat<f64>> {
        self.validate()?;
        let mut adj = self.symmetric_uniform(rng);
        for i in 0..self.n {
            for j in 0..self.n {
                adj[(i, j)] = if adj[(i, j)] >= self.threshold {
                    1.0
                } else {
                    0.0
                };
            }
        }
        clear_diagonal(&mut adj);
        Ok(adj)
    }
}

fn clear_diagonal(mat: &mut Mat<f64>) {
    for i in 0..mat.nrows() {
        mat[(i, i)] = 0.0;
    }
}
