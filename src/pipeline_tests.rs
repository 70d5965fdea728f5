#[cfg(test)]
mod tests {
    use crate::cluster::{cluster_spectra, Kmeans};
    use crate::graph::GraphGenerator;
    use crate::laplacian::laplacian;
    use crate::spectrum::{round_near_zero, spectrum, DEFAULT_ZERO_TOL};
    use crate::Result;
    use faer::Mat;
    use rand::prelude::*;

    fn seeded_spectra(seed: u64, n_graphs: usize, n_nodes: usize) -> Result<Vec<Vec<f64>>> {
        let mut rng = StdRng::seed_from_u64(seed);
        let gen = GraphGenerator::new(n_nodes);
        let mut spectra = Vec::with_capacity(n_graphs);
        for _ in 0..n_graphs {
            let adj = gen.unweighted_adjacency(&mut rng)?;
            spectra.push(spectrum(&laplacian(&adj, false)?)?);
        }
        Ok(spectra)
    }

    #[test]
    fn test_single_edge_end_to_end() -> Result<()> {
        // A = [[0,1],[1,0]] -> D = I -> L = [[1,-1],[-1,1]] -> spectrum [0, 2]
        let mut adj = Mat::<f64>::zeros(2, 2);
        adj[(0, 1)] = 1.0;
        adj[(1, 0)] = 1.0;

        let lap = laplacian(&adj, false)?;
        assert_eq!(lap[(0, 0)], 1.0);
        assert_eq!(lap[(1, 0)], -1.0);

        let eigs = spectrum(&lap)?;
        assert!(eigs[0].abs() < 1e-10);
        assert!((eigs[1] - 2.0).abs() < 1e-10);
        Ok(())
    }

    #[test]
    fn test_edgeless_graph_end_to_end() -> Result<()> {
        // No edges: L is the zero matrix, every eigenvalue is 0
        let adj = Mat::<f64>::zeros(3, 3);
        let eigs = spectrum(&laplacian(&adj, false)?)?;

        assert_eq!(eigs.len(), 3);
        for eig in eigs {
            assert!(eig.abs() < 1e-10);
        }
        Ok(())
    }

    #[test]
    fn test_null_eigenvalue_across_random_graphs() -> Result<()> {
        // Every generated Laplacian has 0 as its smallest eigenvalue, and
        // rounding snaps the float residue away
        let mut rng = StdRng::seed_from_u64(7);
        let gen = GraphGenerator::new(8);

        for weighted in [true, false] {
            for _ in 0..3 {
                let adj = if weighted {
                    gen.weighted_adjacency(&mut rng)?
                } else {
                    gen.unweighted_adjacency(&mut rng)?
                };
                let eigs = spectrum(&laplacian(&adj, weighted)?)?;

                assert_eq!(eigs.len(), 8);
                assert!(eigs[0].abs() < DEFAULT_ZERO_TOL);

                let rounded = round_near_zero(&eigs, DEFAULT_ZERO_TOL);
                assert_eq!(rounded[0], 0.0);
            }
        }
        Ok(())
    }

    #[test]
    fn test_survey_reproducible() -> Result<()> {
        let spectra1 = seeded_spectra(42, 10, 10)?;
        let spectra2 = seeded_spectra(42, 10, 10)?;
        assert_eq!(spectra1, spectra2);

        let config = Kmeans::new(3).with_seed(42);
        let fit1 = cluster_spectra(&spectra1, &config)?;
        let fit2 = cluster_spectra(&spectra2, &config)?;

        assert_eq!(fit1.labels, fit2.labels);
        assert_eq!(fit1.inertia, fit2.inertia);
        assert_eq!(fit1.labels.len(), 10);
        for &label in &fit1.labels {
            assert!(label < 3);
        }
        Ok(())
    }

    #[test]
    fn test_mixed_density_graphs_cluster_apart() -> Result<()> {
        // Spectra of near-complete graphs sit far from spectra of sparse
        // ones, so a 2-way split separates the two families
        let mut rng = StdRng::seed_from_u64(13);
        let n = 8;

        let sparse = GraphGenerator::new(n).with_threshold(0.9);
        let dense = GraphGenerator::new(n).with_threshold(0.1);

        let mut spectra = Vec::new();
        for _ in 0..3 {
            let adj = sparse.unweighted_adjacency(&mut rng)?;
            spectra.push(spectrum(&laplacian(&adj, false)?)?);
        }
        for _ in 0..3 {
            let adj = dense.unweighted_adjacency(&mut rng)?;
            spectra.push(spectrum(&laplacian(&adj, false)?)?);
        }

        let fit = cluster_spectra(&spectra, &Kmeans::new(2).with_seed(1))?;

        assert_eq!(fit.labels[0], fit.labels[1]);
        assert_eq!(fit.labels[1], fit.labels[2]);
        assert_eq!(fit.labels[3], fit.labels[4]);
        assert_eq!(fit.labels[4], fit.labels[5]);
        assert_ne!(fit.labels[0], fit.labels[3]);
        Ok(())
    }
}
