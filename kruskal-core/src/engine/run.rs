//! Externally driven run loop.
//!
//! A run is a sequence of single decisions. The caller owns the loop and
//! regains control after each one, which is where pacing and rendering
//! happen. Resetting the engine invalidates outstanding handles.

use crate::graph::VertexId;

use super::{EngineStatus, KruskalEngine, Observation};

/// Progress reported by [`RunHandle::advance`].
#[derive(Clone, Debug, PartialEq)]
pub enum RunProgress<V> {
    /// One frontier edge was evaluated.
    Decided(Observation<V>),
    /// The engine reached [`EngineStatus::Complete`]; no decision was made.
    Finished,
    /// The engine was reset after the handle was issued; no decision was made.
    Cancelled,
}

/// Token for a run started with [`KruskalEngine::begin_run`].
///
/// The handle remembers the engine generation it was issued for. Any reset
/// bumps the generation, after which the handle only reports
/// [`RunProgress::Cancelled`].
///
/// # Examples
/// ```
/// use kruskal_core::{GraphBuilder, RunProgress};
///
/// let mut engine = GraphBuilder::new()
///     .with_vertices(["A", "B", "C"])
///     .with_edge("A", "B", 1.0)
///     .with_edge("B", "C", 2.0)
///     .with_edge("A", "C", 3.0)
///     .build_engine()
///     .expect("graph is valid");
///
/// let run = engine.begin_run().expect("fresh engine can run");
/// let mut accepted = 0;
/// while let RunProgress::Decided(observation) = run.advance(&mut engine) {
///     if observation.is_accepted() {
///         accepted += 1;
///     }
/// }
/// assert_eq!(accepted, 2);
/// assert!(engine.is_complete());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use = "a run only makes progress when its handle is advanced"]
pub struct RunHandle {
    generation: u64,
}

impl RunHandle {
    pub(super) const fn new(generation: u64) -> Self {
        Self { generation }
    }

    /// Returns the engine generation this handle was issued for.
    #[must_use]
    #[rustfmt::skip]
    pub const fn generation(&self) -> u64 { self.generation }

    /// Returns `true` while `engine` is still running this handle's run.
    #[must_use]
    pub fn is_live<V: VertexId>(&self, engine: &KruskalEngine<V>) -> bool {
        engine.generation() == self.generation && engine.status() == EngineStatus::Running
    }

    /// Makes the next decision of the run.
    ///
    /// Returns [`RunProgress::Cancelled`] if `engine` was reset since the
    /// handle was issued and [`RunProgress::Finished`] once it completed.
    pub fn advance<V: VertexId>(&self, engine: &mut KruskalEngine<V>) -> RunProgress<V> {
        if engine.generation() != self.generation {
            return RunProgress::Cancelled;
        }
        match engine.status() {
            EngineStatus::Running => engine
                .decide(EngineStatus::Running)
                .map_or(RunProgress::Finished, RunProgress::Decided),
            EngineStatus::Complete => RunProgress::Finished,
            EngineStatus::Idle | EngineStatus::Stepping => RunProgress::Cancelled,
        }
    }
}
