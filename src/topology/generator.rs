//! Random topology generation.
//!
//! Produces synthetic copper/fiber networks for experiments and for
//! exercising the analyses on inputs larger than hand-written fixtures.
//! A fixed seed always reproduces the same topology.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::graph::{Topology, TopologyError};
use super::link::{Medium, WeightedLink};

/// Parameters for [`generate_topology`]
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub vertices: usize,
    pub links: usize,
    /// Fraction of links that are fiber, in `[0, 1]`
    pub fiber_ratio: f64,
    /// Lay down a random spanning tree first so the result is connected
    pub connected: bool,
    pub min_bandwidth: u32,
    pub max_bandwidth: u32,
    pub min_length: f64,
    pub max_length: f64,
    pub seed: Option<u64>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            vertices: 8,
            links: 12,
            fiber_ratio: 0.5,
            connected: true,
            min_bandwidth: 100,
            max_bandwidth: 10_000,
            min_length: 1.0,
            max_length: 500.0,
            seed: None,
        }
    }
}

fn random_link<R: Rng>(rng: &mut R, options: &GeneratorOptions, from: usize, to: usize) -> WeightedLink {
    let medium = if rng.gen_bool(options.fiber_ratio.clamp(0.0, 1.0)) {
        Medium::Fiber
    } else {
        Medium::Copper
    };
    let min_bandwidth = options.min_bandwidth.max(1);
    let bandwidth = rng.gen_range(min_bandwidth..=options.max_bandwidth.max(min_bandwidth));
    // whole metres keep the written file short
    let length = rng
        .gen_range(options.min_length..=options.max_length.max(options.min_length))
        .round()
        .max(1.0);
    WeightedLink::new(from, to, medium, bandwidth, length)
}

/// Generate a random topology.
///
/// When `connected` is set, the first `vertices - 1` links form a random
/// spanning tree; the remaining links join random distinct vertex pairs.
pub fn generate_topology(options: &GeneratorOptions) -> Result<Topology, TopologyError> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let n = options.vertices;
    let mut topology = Topology::new(n);
    if n < 2 {
        return Ok(topology);
    }

    if options.connected {
        for v in 1..n {
            let parent = rng.gen_range(0..v);
            topology.add_link(random_link(&mut rng, options, parent, v))?;
        }
        debug!("Generated spanning tree with {} links", n - 1);
    }

    while topology.link_count() < options.links {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a == b {
            continue;
        }
        topology.add_link(random_link(&mut rng, options, a, b))?;
    }

    info!(
        "Generated topology with {} vertices and {} links",
        topology.vertex_count(),
        topology.link_count()
    );
    Ok(topology)
}
