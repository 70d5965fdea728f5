//! Survey driver: fingerprint a batch of random graphs by Laplacian
//! spectrum and report a k-means grouping.

use lapspec::{cluster_spectra, laplacian, spectrum, GraphGenerator, Kmeans};
use rand::prelude::*;

const N_GRAPHS: usize = 10;
const N_NODES: usize = 10;
const N_CLUSTERS: usize = 3;
const SEED: u64 = 42;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let gen = GraphGenerator::new(N_NODES);

    let mut spectra = Vec::with_capacity(N_GRAPHS);
    for _ in 0..N_GRAPHS {
        let adj = gen.unweighted_adjacency(&mut rng)?;
        let lap = laplacian(&adj, false)?;
        spectra.push(spectrum(&lap)?);
    }

    println!(
        "computed {} spectra of length {}",
        spectra.len(),
        spectra[0].len()
    );

    let fit = cluster_spectra(&spectra, &Kmeans::new(N_CLUSTERS).with_seed(SEED))?;

    println!("labels: {:?}", fit.labels);

    let mut counts = vec![0usize; N_CLUSTERS];
    for &label in &fit.labels {
        counts[label] += 1;
    }
    for (cluster, count) in counts.iter().enumerate() {
        println!("cluster {cluster}: {count} graphs");
    }
    println!("inertia: {:.6}", fit.inertia);

    Ok(())
}
