//! The weight-sorted queue of candidate edges.

use std::cmp::Ordering;

use crate::{
    disjoint_set::DisjointSet,
    error::{EngineError, Result},
    graph::{Edge, VertexId},
};

/// A candidate edge together with its position in the supplied edge list.
#[derive(Clone, Debug, PartialEq)]
pub struct FrontierEntry<V> {
    edge: Edge<V>,
    input_index: usize,
    endpoints: (usize, usize),
}

impl<V> FrontierEntry<V> {
    /// Returns the candidate edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> &Edge<V> { &self.edge }

    /// Returns the edge's position in the supplied edge list.
    #[must_use]
    #[rustfmt::skip]
    pub const fn input_index(&self) -> usize { self.input_index }

    /// Dense disjoint-set indices of the two endpoints.
    pub(crate) const fn endpoints(&self) -> (usize, usize) {
        self.endpoints
    }
}

/// Resolves every edge against the disjoint set's vertex registry.
///
/// Entries are returned in input order.
pub(super) fn resolve<V: VertexId>(
    edges: &[Edge<V>],
    set: &DisjointSet<V>,
) -> Result<Vec<FrontierEntry<V>>> {
    edges
        .iter()
        .enumerate()
        .map(|(input_index, edge)| {
            let lookup = |vertex: &V| {
                set.index_of(vertex).map_err(|_| EngineError::UnknownVertex {
                    vertex: vertex.to_string(),
                    edge_index: input_index,
                })
            };
            let endpoints = (lookup(edge.from())?, lookup(edge.to())?);
            Ok(FrontierEntry {
                edge: edge.clone(),
                input_index,
                endpoints,
            })
        })
        .collect()
}

/// Orders two entries by numeric weight.
///
/// Weights are finite by the time they reach the frontier, so `partial_cmp`
/// always succeeds. `-0.0` and `0.0` compare equal and keep their input order.
fn by_weight<V>(left: &FrontierEntry<V>, right: &FrontierEntry<V>) -> Ordering {
    let (left, right) = (left.edge.weight(), right.edge.weight());
    left.partial_cmp(&right).unwrap_or(Ordering::Equal)
}

/// Candidate edges in ascending weight order.
///
/// The sort is stable: equal weights keep their input order.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct Frontier<V> {
    entries: Vec<FrontierEntry<V>>,
}

impl<V: Clone> Frontier<V> {
    pub(super) fn sorted(candidates: &[FrontierEntry<V>]) -> Self {
        let mut entries = candidates.to_vec();
        entries.sort_by(by_weight);
        Self { entries }
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn get(&self, position: usize) -> Option<&FrontierEntry<V>> {
        self.entries.get(position)
    }

    pub(super) fn as_slice(&self) -> &[FrontierEntry<V>] {
        &self.entries
    }
}
