//! Kruskal core library.
//!
//! A steppable Kruskal minimum spanning tree engine. Callers either advance
//! the algorithm one edge decision at a time or run it to completion while
//! observing every decision; both paths make identical decisions.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the engine emits:
//!
//! - `kruskal_edges_accepted` (counter)
//! - `kruskal_edges_rejected` (counter)
//! - `kruskal_runs_cancelled` (counter)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod disjoint_set;
mod engine;
mod error;
mod graph;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::GraphBuilder,
    disjoint_set::{ComponentPartition, DisjointSet},
    engine::{
        Decision, EngineStatus, FrontierEntry, KruskalEngine, Observation, RunHandle, RunOutcome,
        RunProgress, RunSummary, StepOutcome,
    },
    error::{
        CallRejection, DisjointSetError, DisjointSetErrorCode, EngineError, EngineErrorCode, Result,
    },
    graph::{Edge, Graph, VertexId},
};
