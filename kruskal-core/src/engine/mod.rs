//! Incremental Kruskal minimum spanning tree engine.
//!
//! The engine owns a validated graph, the weight-sorted frontier, a
//! [`DisjointSet`] for cycle detection and the accepted-edge accumulator.
//! [`KruskalEngine::step_once`] evaluates exactly one frontier edge; a run
//! ([`KruskalEngine::begin_run`] plus [`RunHandle::advance`], or the
//! [`KruskalEngine::run_to_completion`] convenience) makes the same decisions
//! one at a time while handing control back to the caller in between.
//!
//! The engine halts as soon as the accumulator holds `|V| - 1` edges; the
//! remaining frontier edges are never evaluated. A disconnected graph
//! completes by exhausting the frontier and reports a spanning forest.

mod frontier;
mod observation;
mod run;

use std::fmt;

use tracing::{debug, info, instrument, warn};

use crate::{
    disjoint_set::{ComponentPartition, DisjointSet},
    error::{CallRejection, EngineError, Result},
    graph::{Edge, Graph, VertexId},
};

pub use self::{
    frontier::FrontierEntry,
    observation::{Decision, Observation, RunOutcome, RunSummary},
    run::{RunHandle, RunProgress},
};

use self::frontier::Frontier;

/// Lifecycle state of a [`KruskalEngine`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EngineStatus {
    /// Freshly constructed or reset; no decision made yet.
    Idle,
    /// Advanced by [`KruskalEngine::step_once`] and paused between steps.
    Stepping,
    /// A run started by [`KruskalEngine::begin_run`] is in flight.
    Running,
    /// The tree is complete or the frontier is exhausted.
    Complete,
}

impl EngineStatus {
    /// Returns a lowercase label suitable for logs and machine output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Stepping => "stepping",
            Self::Running => "running",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`KruskalEngine::step_once`].
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum StepOutcome<V> {
    /// One frontier edge was evaluated.
    Decided(Observation<V>),
    /// The call was out of sequence; the engine was left untouched.
    Rejected(CallRejection),
}

impl<V> StepOutcome<V> {
    /// Returns the observation when a decision was made.
    #[must_use]
    pub fn observation(self) -> Option<Observation<V>> {
        match self {
            Self::Decided(observation) => Some(observation),
            Self::Rejected(_) => None,
        }
    }
}

/// Steppable Kruskal engine over a single graph.
///
/// # Examples
/// ```
/// use kruskal_core::{Decision, Edge, EngineStatus, Graph, KruskalEngine, StepOutcome};
///
/// let graph = Graph::new(
///     vec!["A", "B", "C"],
///     vec![
///         Edge::new("A", "B", 1.0),
///         Edge::new("B", "C", 1.0),
///         Edge::new("A", "C", 0.5),
///     ],
/// );
/// let mut engine = KruskalEngine::new(graph).expect("graph is valid");
///
/// let StepOutcome::Decided(first) = engine.step_once() else {
///     panic!("a fresh engine must decide");
/// };
/// assert_eq!(first.decision(), Decision::Accepted);
/// assert_eq!(first.edge().weight(), 0.5);
/// assert_eq!(engine.status(), EngineStatus::Stepping);
///
/// let summary = engine.run_to_completion(|_| {}).expect("paused engine can run");
/// assert_eq!(summary.total_weight(), 1.5);
/// assert_eq!(engine.status(), EngineStatus::Complete);
/// ```
#[derive(Clone, Debug)]
pub struct KruskalEngine<V> {
    graph: Graph<V>,
    candidates: Vec<FrontierEntry<V>>,
    frontier: Frontier<V>,
    components: DisjointSet<V>,
    cursor: usize,
    mst_edges: Vec<Edge<V>>,
    total_weight: f64,
    status: EngineStatus,
    generation: u64,
}

impl<V: VertexId> KruskalEngine<V> {
    /// Validates `graph` and builds an [`EngineStatus::Idle`] engine over it.
    ///
    /// # Errors
    /// Returns the [`EngineError`] reported by [`Graph::validate`].
    #[instrument(
        name = "engine.new",
        err,
        skip(graph),
        fields(vertices = graph.vertex_count(), edges = graph.edges().len()),
    )]
    pub fn new(graph: Graph<V>) -> Result<Self> {
        let (components, candidates) = prepare(&graph)?;
        let mut engine = Self {
            frontier: Frontier::sorted(&candidates),
            graph,
            candidates,
            components,
            cursor: 0,
            mst_edges: Vec::new(),
            total_weight: 0.0,
            status: EngineStatus::Idle,
            generation: 0,
        };
        engine.reset();
        Ok(engine)
    }

    /// Supplies a new graph and resets the engine over it.
    ///
    /// Any run in progress is cancelled. On error the engine keeps its
    /// previous graph and state.
    ///
    /// # Errors
    /// Returns the [`EngineError`] reported by [`Graph::validate`].
    #[instrument(
        name = "engine.replace_graph",
        err,
        skip(self, graph),
        fields(vertices = graph.vertex_count(), edges = graph.edges().len()),
    )]
    pub fn replace_graph(&mut self, graph: Graph<V>) -> Result<()> {
        let (components, candidates) = prepare(&graph)?;
        self.graph = graph;
        self.components = components;
        self.candidates = candidates;
        self.reset();
        Ok(())
    }

    /// Rebuilds all derived state from the current graph.
    ///
    /// Re-sorts the frontier, splits the disjoint set back into singletons,
    /// clears the accumulator, rewinds the cursor and returns to
    /// [`EngineStatus::Idle`]. Outstanding [`RunHandle`]s are cancelled.
    pub fn reset(&mut self) {
        if self.status == EngineStatus::Running {
            warn!(
                generation = self.generation,
                cursor = self.cursor,
                "run cancelled by reset"
            );
            record_cancelled_run();
        }

        self.frontier = Frontier::sorted(&self.candidates);
        self.components.reset();
        self.cursor = 0;
        self.mst_edges.clear();
        self.total_weight = 0.0;
        self.status = EngineStatus::Idle;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Evaluates the next frontier edge.
    ///
    /// Rejected with [`CallRejection::RunInProgress`] while a run is active
    /// and with [`CallRejection::AlreadyComplete`] once the tree is complete
    /// or the frontier is exhausted.
    pub fn step_once(&mut self) -> StepOutcome<V> {
        match self.status {
            EngineStatus::Running => {
                warn!(
                    generation = self.generation,
                    "step rejected: run in progress"
                );
                StepOutcome::Rejected(CallRejection::RunInProgress)
            }
            EngineStatus::Complete => StepOutcome::Rejected(CallRejection::AlreadyComplete),
            EngineStatus::Idle | EngineStatus::Stepping => {
                match self.decide(EngineStatus::Stepping) {
                    Some(observation) => StepOutcome::Decided(observation),
                    None => StepOutcome::Rejected(CallRejection::AlreadyComplete),
                }
            }
        }
    }

    /// Starts a run and returns the handle that drives it.
    ///
    /// Valid from [`EngineStatus::Idle`] and [`EngineStatus::Stepping`]; a
    /// run may pick up where single steps left off.
    ///
    /// # Errors
    /// Returns [`CallRejection::RunInProgress`] while another run is active
    /// and [`CallRejection::AlreadyComplete`] once the engine has completed.
    pub fn begin_run(&mut self) -> core::result::Result<RunHandle, CallRejection> {
        match self.status {
            EngineStatus::Running => {
                warn!(
                    generation = self.generation,
                    "run rejected: run in progress"
                );
                Err(CallRejection::RunInProgress)
            }
            EngineStatus::Complete => Err(CallRejection::AlreadyComplete),
            EngineStatus::Idle | EngineStatus::Stepping => {
                self.status = EngineStatus::Running;
                debug!(
                    generation = self.generation,
                    cursor = self.cursor,
                    "run started"
                );
                Ok(RunHandle::new(self.generation))
            }
        }
    }

    /// Runs to completion, passing every observation to `observer`.
    ///
    /// Makes exactly the decisions repeated [`Self::step_once`] calls would.
    /// The observer runs between decisions and is where callers pace or
    /// render; the engine itself never sleeps.
    ///
    /// # Errors
    /// Returns the [`CallRejection`] from [`Self::begin_run`].
    #[instrument(
        name = "engine.run_to_completion",
        skip(self, observer),
        fields(vertices = self.vertex_count(), frontier = self.frontier.len()),
    )]
    pub fn run_to_completion<F>(
        &mut self,
        mut observer: F,
    ) -> core::result::Result<RunSummary<V>, CallRejection>
    where
        F: FnMut(&Observation<V>),
    {
        let run = self.begin_run()?;
        while let RunProgress::Decided(observation) = run.advance(self) {
            observer(&observation);
        }
        Ok(self.summary())
    }

    /// Returns every vertex's current root.
    pub fn current_components(&mut self) -> ComponentPartition<V> {
        self.components.partition()
    }

    /// Returns the accumulated result so far.
    #[must_use]
    pub fn summary(&self) -> RunSummary<V> {
        let component_count = self.components.component_count();
        let outcome = match (self.status, component_count) {
            (EngineStatus::Complete, 1) => RunOutcome::SpanningTree,
            (EngineStatus::Complete, components) => RunOutcome::SpanningForest { components },
            _ => RunOutcome::InProgress,
        };
        RunSummary {
            mst_edges: self.mst_edges.clone(),
            total_weight: self.total_weight,
            decisions: self.cursor,
            component_count,
            outcome,
        }
    }

    /// Returns the graph the engine was built over.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &Graph<V> { &self.graph }

    /// Returns the lifecycle state.
    #[must_use]
    #[rustfmt::skip]
    pub const fn status(&self) -> EngineStatus { self.status }

    /// Returns `true` once the engine reached [`EngineStatus::Complete`].
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.status, EngineStatus::Complete)
    }

    /// Returns how many frontier edges have been evaluated.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cursor(&self) -> usize { self.cursor }

    /// Returns the reset generation; bumped by every reset.
    #[must_use]
    #[rustfmt::skip]
    pub const fn generation(&self) -> u64 { self.generation }

    /// Returns the full frontier in processing order.
    #[must_use]
    pub fn frontier(&self) -> &[FrontierEntry<V>] {
        self.frontier.as_slice()
    }

    /// Returns the frontier entries not yet evaluated.
    #[must_use]
    pub fn remaining(&self) -> &[FrontierEntry<V>] {
        self.frontier
            .as_slice()
            .get(self.cursor..)
            .unwrap_or_default()
    }

    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn mst_edges(&self) -> &[Edge<V>] { &self.mst_edges }

    /// Returns the sum of accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Returns the number of edges a spanning tree needs (`|V| - 1`).
    #[must_use]
    pub fn target_edge_count(&self) -> usize {
        self.graph.spanning_edge_count()
    }

    fn is_exhausted(&self) -> bool {
        self.mst_edges.len() >= self.target_edge_count() || self.cursor >= self.frontier.len()
    }

    /// Makes one decision, leaving the engine in `active` unless it completes.
    ///
    /// Returns `None` without deciding when nothing is left to evaluate.
    fn decide(&mut self, active: EngineStatus) -> Option<Observation<V>> {
        if self.is_exhausted() {
            self.finish();
            return None;
        }
        let position = self.cursor;
        let entry = self.frontier.get(position)?.clone();

        let (from, to) = entry.endpoints();
        let decision = if self.components.connected_indices(from, to) {
            Decision::Rejected
        } else {
            let merged = self.components.union_indices(from, to);
            debug_assert!(merged, "disconnected endpoints must merge");
            self.mst_edges.push(entry.edge().clone());
            self.total_weight += entry.edge().weight();
            Decision::Accepted
        };
        self.cursor = position.saturating_add(1);
        record_decision(decision);

        debug!(
            from = %entry.edge().from(),
            to = %entry.edge().to(),
            weight = entry.edge().weight(),
            decision = %decision,
            position,
            accepted = self.mst_edges.len(),
            target = self.target_edge_count(),
            "edge evaluated"
        );

        if self.is_exhausted() {
            self.finish();
        } else {
            self.status = active;
        }

        Some(Observation {
            edge: entry.edge().clone(),
            decision,
            input_index: entry.input_index(),
            frontier_position: position,
            mst_edges: self.mst_edges.clone(),
            total_weight: self.total_weight,
            target_edge_count: self.target_edge_count(),
            status: self.status,
            components: self.components.partition(),
        })
    }

    fn finish(&mut self) {
        if self.status == EngineStatus::Complete {
            return;
        }
        self.status = EngineStatus::Complete;
        info!(
            total_weight = self.total_weight,
            accepted = self.mst_edges.len(),
            evaluated = self.cursor,
            components = self.components.component_count(),
            "kruskal complete"
        );
    }
}

/// Validates `graph` and derives the disjoint set and unsorted candidates.
fn prepare<V: VertexId>(graph: &Graph<V>) -> Result<(DisjointSet<V>, Vec<FrontierEntry<V>>)> {
    graph.validate()?;
    let vertices = graph.vertices().iter().cloned();
    let components = DisjointSet::new(vertices).map_err(|err| EngineError::DuplicateVertex {
        vertex: err.into_vertex(),
    })?;
    let candidates = frontier::resolve(graph.edges(), &components)?;
    Ok((components, candidates))
}

#[cfg(feature = "metrics")]
fn record_decision(decision: Decision) {
    match decision {
        Decision::Accepted => metrics::counter!("kruskal_edges_accepted").increment(1),
        Decision::Rejected => metrics::counter!("kruskal_edges_rejected").increment(1),
    }
}

#[cfg(not(feature = "metrics"))]
fn record_decision(_decision: Decision) {}

#[cfg(feature = "metrics")]
fn record_cancelled_run() {
    metrics::counter!("kruskal_runs_cancelled").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_cancelled_run() {}



#[cfg(test)]
mod property;
