//! Fixture types for engine property tests.

use std::fmt;

use proptest::test_runner::TestCaseError;

use crate::graph::{Edge, Graph};

/// Weight distribution strategy for generated graphs.
///
/// Each variant produces inputs that stress a different part of the engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a weight drawn from a continuous range.
    Unique,
    /// Large groups of edges share identical weights, stressing the stable
    /// tie-break.
    ManyIdentical,
    /// A random spanning tree plus a few extra edges, self-loops and
    /// parallel edges.
    Sparse,
    /// Close to a complete graph.
    Dense,
    /// Several components with no edges between them.
    Disconnected,
}

/// A generated graph over the vertices `0..vertex_count`.
///
/// Keeps the distribution alongside the edges so failures can be traced
/// back to the generator that produced them.
#[derive(Clone, Debug)]
pub(super) struct KruskalFixture {
    pub vertex_count: usize,
    pub edges: Vec<Edge<usize>>,
    pub distribution: WeightDistribution,
}

impl KruskalFixture {
    /// Builds the engine input for this fixture.
    pub(super) fn graph(&self) -> Graph<usize> {
        Graph::new((0..self.vertex_count).collect(), self.edges.clone())
    }

    /// Describes the fixture for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len(),
        )
    }

    /// Builds a test failure whose message names this fixture.
    pub(super) fn failure(&self, message: impl fmt::Display) -> TestCaseError {
        TestCaseError::fail(format!("{message} ({})", self.describe()))
    }
}
