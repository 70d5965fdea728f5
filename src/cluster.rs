//! K-means over spectral fingerprints.
//!
//! Groups graphs by the similarity of their Laplacian spectra. Each spectrum
//! becomes one row of a feature matrix; Lloyd's algorithm then minimizes the
//! **within-cluster sum of squares** (WCSS, reported back as `inertia`):
//!
//! ```text
//! WCSS = Σₖ Σᵢ∈Cₖ ||xᵢ - μₖ||²
//! ```
//!
//! # Lloyd's Algorithm
//!
//! 1. Seed k centroids via k-means++
//! 2. **Assign**: each row → nearest centroid (squared Euclidean)
//! 3. **Update**: each centroid → mean of its assigned rows
//! 4. Repeat until the total centroid shift drops below the tolerance or
//!    `max_iter` rounds have run (iteration-limit exhaustion is normal
//!    termination, not an error)
//!
//! WCSS never increases between rounds and is bounded below by zero, so the
//! loop always terminates; what it finds is a local minimum.
//!
//! ## K-means++ Seeding
//!
//! The first centroid is a uniformly random row; each further centroid is
//! sampled with probability proportional to its squared distance from the
//! nearest centroid chosen so far. Spreading the seeds this way carries the
//! classic O(log k) approximation guarantee.
//!
//! # Determinism
//!
//! Assignment ties break toward the lower centroid index, and every random
//! draw flows from the configured seed, so a seeded fit is fully
//! reproducible.

use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView1};
use rand::prelude::*;

/// K-means configuration.
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Number of clusters.
    k: usize,
    /// Maximum iterations.
    max_iter: usize,
    /// Convergence tolerance on total squared centroid shift.
    tol: f64,
    /// Random seed.
    seed: Option<u64>,
}

/// Outcome of a k-means fit: centroids, one label per row, and the final
/// within-cluster sum of squares.
#[derive(Debug, Clone)]
pub struct KmeansFit {
    /// Cluster centers, one row per cluster.
    pub centroids: Array2<f64>,
    /// Cluster index assigned to each input row.
    pub labels: Vec<usize>,
    /// Within-cluster sum of squares under the final assignment.
    pub inertia: f64,
}

impl Kmeans {
    /// Create a new k-means configuration for `k` clusters.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: 100,
            tol: 1e-4,
            seed: None,
        }
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set convergence tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Initialize centroids using the k-means++ scheme.
    fn init_centroids(&self, data: &Array2<f64>, rng: &mut impl Rng) -> Array2<f64> {
        let n = data.nrows();
        let d = data.ncols();
        let mut centroids = Array2::zeros((self.k, d));

        // First centroid: random row
        let first = rng.random_range(0..n);
        centroids.row_mut(0).assign(&data.row(first));

        // Remaining centroids: sampled proportional to squared distance
        // from the nearest centroid picked so far
        for i in 1..self.k {
            let mut distances: Vec<f64> = Vec::with_capacity(n);
            for j in 0..n {
                let point = data.row(j);
                let min_dist = (0..i)
                    .map(|c| Self::squared_distance(&point, &centroids.row(c)))
                    .fold(f64::MAX, f64::min);
                distances.push(min_dist);
            }

            let total: f64 = distances.iter().sum();
            if total == 0.0 {
                let idx = rng.random_range(0..n);
                centroids.row_mut(i).assign(&data.row(idx));
                continue;
            }

            let threshold = rng.random::<f64>() * total;
            let mut cumsum = 0.0;
            let mut selected = 0;

            for (j, &dist) in distances.iter().enumerate() {
                cumsum += dist;
                if cumsum >= threshold {
                    selected = j;
                    break;
                }
            }

            centroids.row_mut(i).assign(&data.row(selected));
        }

        centroids
    }

    /// Compute squared Euclidean distance.
    fn squared_distance(a: &ArrayView1<'_, f64>, b: &ArrayView1<'_, f64>) -> f64 {
        a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
    }

    /// Index and squared distance of the nearest centroid.
    fn nearest_centroid(point: &ArrayView1<'_, f64>, centroids: &Array2<f64>) -> (usize, f64) {
        let mut best_cluster = 0;
        let mut best_dist = f64::MAX;
        for k in 0..centroids.nrows() {
            let dist = Self::squared_distance(point, &centroids.row(k));
            // Strict comparison: ties keep the lower centroid index
            if dist < best_dist {
                best_dist = dist;
                best_cluster = k;
            }
        }
        (best_cluster, best_dist)
    }

    /// Run Lloyd's algorithm over a feature matrix, one observation per row.
    ///
    /// # Errors
    ///
    /// `Error::EmptyInput` if `data` has no rows, `Error::InvalidClusterCount`
    /// if `k` is zero or exceeds the number of rows.
    pub fn fit(&self, data: &Array2<f64>) -> Result<KmeansFit> {
        let n = data.nrows();
        let d = data.ncols();

        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if self.k == 0 || self.k > n {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: n,
            });
        }

        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };

        let mut centroids = self.init_centroids(data, &mut rng);
        let mut labels = vec![0usize; n];

        for _iter in 0..self.max_iter {
            // Assignment step
            for (i, label) in labels.iter_mut().enumerate() {
                *label = Self::nearest_centroid(&data.row(i), &centroids).0;
            }

            // Update step
            let mut new_centroids = Array2::zeros((self.k, d));
            let mut counts = vec![0usize; self.k];

            for i in 0..n {
                let k = labels[i];
                for j in 0..d {
                    new_centroids[[k, j]] += data[[i, j]];
                }
                counts[k] += 1;
            }

            for k in 0..self.k {
                if counts[k] > 0 {
                    for j in 0..d {
                        new_centroids[[k, j]] /= counts[k] as f64;
                    }
                } else {
                    // Empty cluster: reinitialize from a random row
                    let idx = rng.random_range(0..n);
                    new_centroids.row_mut(k).assign(&data.row(idx));
                }
            }

            // Check convergence
            let shift: f64 = centroids
                .iter()
                .zip(new_centroids.iter())
                .map(|(a, b)| (a - b).powi(2))
                .sum();

            centroids = new_centroids;

            if shift < self.tol {
                break;
            }
        }

        // Final assignment against the final centroids, accumulating WCSS
        let mut inertia = 0.0;
        for (i, label) in labels.iter_mut().enumerate() {
            let (best, dist) = Self::nearest_centroid(&data.row(i), &centroids);
            *label = best;
            inertia += dist;
        }

        Ok(KmeansFit {
            centroids,
            labels,
            inertia,
        })
    }
}

/// Stack spectra into a feature matrix, one spectrum per row.
///
/// The first spectrum sets the expected length; the rest must match it.
///
/// # Errors
///
/// `Error::EmptyInput` for an empty collection, `Error::InvalidParameter`
/// for zero-length spectra, `Error::DimensionMismatch` on the first
/// spectrum whose length differs from the first's.
pub fn spectra_matrix(spectra: &[Vec<f64>]) -> Result<Array2<f64>> {
    if spectra.is_empty() {
        return Err(Error::EmptyInput);
    }
    let d = spectra[0].len();
    if d == 0 {
        return Err(Error::InvalidParameter {
            name: "spectra",
            message: "spectra must have nonzero length",
        });
    }

    let mut flat: Vec<f64> = Vec::with_capacity(spectra.len() * d);
    for spectrum in spectra {
        if spectrum.len() != d {
            return Err(Error::DimensionMismatch {
                expected: d,
                found: spectrum.len(),
            });
        }
        flat.extend(spectrum);
    }
    Array2::from_shape_vec((spectra.len(), d), flat).map_err(|e| Error::Other(e.to_string()))
}

/// Cluster a batch of spectra: stack them into a feature matrix, then fit.
pub fn cluster_spectra(spectra: &[Vec<f64>], config: &Kmeans) -> Result<KmeansFit> {
    let features = spectra_matrix(spectra)?;
    config.fit(&features)
}
