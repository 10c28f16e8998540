//! Seeded synthetic graphs for engine benchmarks.
//!
//! Every graph is connected: a random spanning path over all vertices is laid
//! down first, then extra random edges (self-loops and parallel edges
//! included) are appended. Edge order is shuffled so the frontier sort has
//! real work to do.

use kruskal_core::{Edge, Graph};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::error::BenchSetupError;

/// How edge weights are drawn.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WeightProfile {
    /// Weights drawn uniformly from `[0, 1000)`.
    Continuous,
    /// Weights drawn from `distinct` integer values, producing many ties.
    Tied {
        /// Number of distinct weights.
        distinct: u32,
    },
}

/// Configuration for [`generate`].
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices, labelled `0..vertex_count`.
    pub vertex_count: usize,
    /// Number of random edges added on top of the spanning path.
    pub extra_edges: usize,
    /// Weight distribution.
    pub weights: WeightProfile,
    /// RNG seed; equal configs produce equal graphs.
    pub seed: u64,
}

/// Generates a connected graph described by `config`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] for a zero vertex count or a tied
/// profile without weights.
///
/// # Examples
/// ```
/// use kruskal_benches::graph::{SyntheticGraphConfig, WeightProfile, generate};
///
/// let graph = generate(&SyntheticGraphConfig {
///     vertex_count: 10,
///     extra_edges: 5,
///     weights: WeightProfile::Continuous,
///     seed: 7,
/// })?;
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edges().len(), 9 + 5);
/// # Ok::<(), kruskal_benches::error::BenchSetupError>(())
/// ```
pub fn generate(config: &SyntheticGraphConfig) -> Result<Graph<usize>, BenchSetupError> {
    if config.vertex_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertex_count",
        });
    }
    if config.weights == (WeightProfile::Tied { distinct: 0 }) {
        return Err(BenchSetupError::ZeroValue {
            context: "weights.distinct",
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut order: Vec<usize> = (0..config.vertex_count).collect();
    order.shuffle(&mut rng);

    let mut edges = Vec::with_capacity(
        config
            .vertex_count
            .saturating_sub(1)
            .saturating_add(config.extra_edges),
    );
    for pair in order.windows(2) {
        if let [from, to] = pair {
            let weight = draw_weight(config.weights, &mut rng);
            edges.push(Edge::new(*from, *to, weight));
        }
    }
    for _ in 0..config.extra_edges {
        let from = rng.gen_range(0..config.vertex_count);
        let to = rng.gen_range(0..config.vertex_count);
        let weight = draw_weight(config.weights, &mut rng);
        edges.push(Edge::new(from, to, weight));
    }
    edges.shuffle(&mut rng);

    let graph = Graph::new((0..config.vertex_count).collect(), edges);
    graph.validate()?;
    Ok(graph)
}

fn draw_weight(profile: WeightProfile, rng: &mut SmallRng) -> f64 {
    match profile {
        WeightProfile::Continuous => rng.gen_range(0.0..1000.0),
        WeightProfile::Tied { distinct } => f64::from(rng.gen_range(0..distinct.max(1))),
    }
}
