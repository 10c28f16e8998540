//! Graph generators for engine property tests.
//!
//! Every generator is driven by a seeded [`SmallRng`] so that proptest only
//! has to shrink a distribution and a seed.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::Edge;

use super::types::{KruskalFixture, WeightDistribution};

const MIN_VERTICES: usize = 8;
const MAX_VERTICES: usize = 48;
/// Kept smaller than [`MAX_VERTICES`] to bound the quadratic edge count.
const DENSE_MAX_VERTICES: usize = 24;

/// Generates fixtures covering every weight distribution, biased towards
/// identical weights.
pub(super) fn kruskal_fixture_strategy() -> impl Strategy<Value = KruskalFixture> {
    let distribution = prop_oneof![
        2 => Just(WeightDistribution::Unique),
        3 => Just(WeightDistribution::ManyIdentical),
        2 => Just(WeightDistribution::Sparse),
        2 => Just(WeightDistribution::Dense),
        2 => Just(WeightDistribution::Disconnected),
    ];
    (distribution, any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for an explicitly chosen distribution.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    rng: &mut SmallRng,
) -> KruskalFixture {
    match distribution {
        WeightDistribution::Unique => generate_probabilistic(
            rng,
            MAX_VERTICES,
            (0.2, 0.6),
            distribution,
            continuous_weight,
        ),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_probabilistic(
            rng,
            DENSE_MAX_VERTICES,
            (0.7, 0.95),
            distribution,
            continuous_weight,
        ),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

fn continuous_weight(rng: &mut SmallRng) -> f64 {
    rng.gen_range(0.1..100.0)
}

/// Adds each vertex pair with a probability sampled from `probability`.
fn generate_probabilistic(
    rng: &mut SmallRng,
    max_vertices: usize,
    probability: (f64, f64),
    distribution: WeightDistribution,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> KruskalFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let edge_probability = rng.gen_range(probability.0..=probability.1);
    let mut edges = Vec::new();

    for (from, to) in all_pairs(0, vertex_count) {
        if rng.gen_bool(edge_probability) {
            let (from, to) = maybe_flip(from, to, rng);
            edges.push(Edge::new(from, to, weight(rng)));
        }
    }

    if edges.is_empty() {
        edges.push(Edge::new(0, 1, weight(rng)));
    }

    KruskalFixture {
        vertex_count,
        edges,
        distribution,
    }
}

/// Draws every weight from a pool of at most three small integers, some of
/// them negative. Zero is drawn with either sign so that `-0.0` and `0.0`
/// tie.
fn generate_identical_weights(rng: &mut SmallRng) -> KruskalFixture {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<f64> = (0..pool_size)
        .map(|_| f64::from(rng.gen_range(-3_i8..=10)))
        .collect();

    generate_probabilistic(
        rng,
        MAX_VERTICES,
        (0.3, 0.7),
        WeightDistribution::ManyIdentical,
        move |r| {
            let weight = pool[r.gen_range(0..pool.len())];
            if weight == 0.0 && r.gen_bool(0.5) {
                -0.0
            } else {
                weight
            }
        },
    )
}

/// Builds a random spanning path, then sprinkles extra edges, self-loops and
/// parallel copies of existing edges on top.
fn generate_sparse(rng: &mut SmallRng) -> KruskalFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);

    let mut edges: Vec<Edge<usize>> = order
        .windows(2)
        .map(|pair| Edge::new(pair[0], pair[1], continuous_weight(rng)))
        .collect();

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let from = rng.gen_range(0..vertex_count);
        let to = rng.gen_range(0..vertex_count);
        edges.push(Edge::new(from, to, continuous_weight(rng)));
    }

    let parallel = rng.gen_range(0..=vertex_count / 4);
    for _ in 0..parallel {
        let original = edges[rng.gen_range(0..edges.len())].clone();
        let weight = if rng.gen_bool(0.5) {
            original.weight()
        } else {
            continuous_weight(rng)
        };
        edges.push(Edge::new(*original.to(), *original.from(), weight));
    }

    shuffle(&mut edges, rng);

    KruskalFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

/// Generates 2-5 components with no edges between them.
fn generate_disconnected(rng: &mut SmallRng) -> KruskalFixture {
    let component_count = rng.gen_range(2..=5);
    let sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(1..=12))
        .collect();
    let vertex_count = sizes.iter().sum();
    let mut edges = Vec::new();
    let mut offset = 0;

    for size in sizes {
        let edge_probability = rng.gen_range(0.3..=0.8);
        let start = edges.len();
        for (from, to) in all_pairs(offset, size) {
            if rng.gen_bool(edge_probability) {
                edges.push(Edge::new(from, to, continuous_weight(rng)));
            }
        }
        if size >= 2 && edges.len() == start {
            edges.push(Edge::new(offset, offset + 1, continuous_weight(rng)));
        }
        offset += size;
    }

    KruskalFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn all_pairs(offset: usize, size: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..size {
        for j in (i + 1)..size {
            pairs.push((offset + i, offset + j));
        }
    }
    pairs
}

/// Edges are undirected, so generated orientation is randomised.
fn maybe_flip(from: usize, to: usize, rng: &mut SmallRng) -> (usize, usize) {
    if rng.gen_bool(0.5) {
        (to, from)
    } else {
        (from, to)
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
