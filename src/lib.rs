//! # lapspec
//!
//! Laplacian spectra as graph fingerprints, clustered with k-means.
//!
//! The pipeline is strictly linear: generate random symmetric adjacency
//! matrices ([`graph`]), build their combinatorial Laplacians
//! ([`laplacian`]), extract ascending eigenvalue spectra ([`spectrum`]),
//! and group the graphs by spectral similarity ([`cluster`]).
//!
//! ```rust
//! use lapspec::{cluster_spectra, laplacian, spectrum, GraphGenerator, Kmeans};
//! use rand::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut rng = StdRng::seed_from_u64(42);
//! let gen = GraphGenerator::new(10);
//!
//! let mut spectra = Vec::new();
//! for _ in 0..4 {
//!     let adj = gen.unweighted_adjacency(&mut rng)?;
//!     spectra.push(spectrum(&laplacian(&adj, false)?)?);
//! }
//!
//! let fit = cluster_spectra(&spectra, &Kmeans::new(2).with_seed(0))?;
//! assert_eq!(fit.labels.len(), 4);
//! # Ok(())
//! # }
//! ```

pub mod cluster;
/// Error types used across `lapspec`.
pub mod error;
pub mod graph;
pub mod laplacian;
pub mod spectrum;

#[cfg(test)]
mod pipeline_tests;

pub use cluster::{cluster_spectra, spectra_matrix, Kmeans, KmeansFit};
pub use error::{Error, Result};
pub use graph::{GraphGenerator, DEFAULT_EDGE_THRESHOLD};
pub use laplacian::{binarize, degree_matrix, laplacian};
pub use spectrum::{round_near_zero, spectrum, DEFAULT_ZERO_TOL};
