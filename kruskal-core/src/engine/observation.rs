//! Snapshots handed to observers after every decision and at the end of a run.

use std::fmt;

use crate::{
    disjoint_set::ComponentPartition,
    graph::{Edge, VertexId},
};

use super::EngineStatus;

/// Outcome of evaluating one frontier edge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Decision {
    /// The endpoints were in different components; the edge joined the tree.
    Accepted,
    /// The endpoints were already connected; the edge would close a cycle.
    Rejected,
}

impl Decision {
    /// Returns a lowercase label suitable for logs and machine output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full engine snapshot emitted once per decision.
///
/// Carries the evaluated edge and its outcome, the accumulated tree with its
/// running weight, the status after the decision, and the component
/// partition for colouring.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation<V> {
    pub(super) edge: Edge<V>,
    pub(super) decision: Decision,
    pub(super) input_index: usize,
    pub(super) frontier_position: usize,
    pub(super) mst_edges: Vec<Edge<V>>,
    pub(super) total_weight: f64,
    pub(super) target_edge_count: usize,
    pub(super) status: EngineStatus,
    pub(super) components: ComponentPartition<V>,
}

impl<V: VertexId> Observation<V> {
    /// Returns the edge that was just evaluated.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> &Edge<V> { &self.edge }

    /// Returns whether the edge was accepted or rejected.
    #[must_use]
    #[rustfmt::skip]
    pub const fn decision(&self) -> Decision { self.decision }

    /// Returns `true` when the edge joined the tree.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self.decision, Decision::Accepted)
    }

    /// Returns the edge's position in the supplied edge list.
    #[must_use]
    #[rustfmt::skip]
    pub const fn input_index(&self) -> usize { self.input_index }

    /// Returns the edge's position in the weight-sorted frontier.
    #[must_use]
    #[rustfmt::skip]
    pub const fn frontier_position(&self) -> usize { self.frontier_position }

    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn mst_edges(&self) -> &[Edge<V>] { &self.mst_edges }

    /// Returns the sum of accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of edges a spanning tree over the graph needs.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target_edge_count(&self) -> usize { self.target_edge_count }

    /// Returns the engine status after this decision.
    #[must_use]
    #[rustfmt::skip]
    pub const fn status(&self) -> EngineStatus { self.status }

    /// Returns the vertex-to-root partition after this decision.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components(&self) -> &ComponentPartition<V> { &self.components }
}

/// How a finished (or paused) engine left the graph.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RunOutcome {
    /// The accepted edges connect every vertex.
    SpanningTree,
    /// The frontier ran out first; the accepted edges form a forest.
    SpanningForest {
        /// Number of trees in the forest.
        components: usize,
    },
    /// The engine has not reached completion yet.
    InProgress,
}

/// Totals describing the engine's accumulated result.
///
/// # Examples
/// ```
/// use kruskal_core::{GraphBuilder, RunOutcome};
///
/// let mut engine = GraphBuilder::new()
///     .with_vertices(["A", "B", "C"])
///     .with_edge("A", "B", 2.0)
///     .build_engine()
///     .expect("graph is valid");
/// let summary = engine.run_to_completion(|_| {}).expect("fresh engine can run");
/// assert_eq!(summary.outcome(), RunOutcome::SpanningForest { components: 2 });
/// assert_eq!(summary.total_weight(), 2.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary<V> {
    pub(super) mst_edges: Vec<Edge<V>>,
    pub(super) total_weight: f64,
    pub(super) decisions: usize,
    pub(super) component_count: usize,
    pub(super) outcome: RunOutcome,
}

impl<V: VertexId> RunSummary<V> {
    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn mst_edges(&self) -> &[Edge<V>] { &self.mst_edges }

    /// Returns the sum of accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns how many frontier edges were evaluated.
    #[must_use]
    #[rustfmt::skip]
    pub const fn decisions(&self) -> usize { self.decisions }

    /// Returns the number of components left.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns whether the result is a tree, a forest or still in progress.
    #[must_use]
    #[rustfmt::skip]
    pub const fn outcome(&self) -> RunOutcome { self.outcome }
}
