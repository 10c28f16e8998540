//! Graph supply types consumed by the engine.
//!
//! A [`Graph`] is a vertex set plus an edge list. Vertices carry no geometry;
//! renderers key positions and colours by vertex identifier.

use std::{collections::HashSet, fmt, hash::Hash};

use crate::error::{EngineError, Result};

/// Marker for types usable as vertex identifiers.
///
/// Implemented for every type that is cloneable, hashable, comparable for
/// equality and printable, which covers short strings and integers.
pub trait VertexId: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> VertexId for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

/// An undirected weighted edge between two vertices.
///
/// Endpoints keep the order they were supplied in; comparisons that care
/// about the pair treat it as unordered (see [`Edge::connects`]).
///
/// # Examples
/// ```
/// use kruskal_core::Edge;
///
/// let edge = Edge::new("X", "Y", 1.0);
/// assert!(edge.connects(&"Y", &"X"));
/// assert_eq!(edge.weight(), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<V> {
    from: V,
    to: V,
    weight: f64,
}

impl<V> Edge<V> {
    /// Creates an edge between `from` and `to`.
    #[must_use]
    pub const fn new(from: V, to: V, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn from(&self) -> &V { &self.from }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn to(&self) -> &V { &self.to }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

impl<V: PartialEq> Edge<V> {
    /// Returns `true` when the edge joins `a` and `b` in either direction.
    #[must_use]
    pub fn connects(&self, a: &V, b: &V) -> bool {
        (self.from == *a && self.to == *b) || (self.from == *b && self.to == *a)
    }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} ({})", self.from, self.to, self.weight)
    }
}

/// A vertex set and edge list supplied to [`crate::KruskalEngine`].
///
/// Construction does not validate; the engine validates on supply via
/// [`Graph::validate`]. Use [`crate::GraphBuilder`] to assemble graphs
/// incrementally.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph<V> {
    vertices: Vec<V>,
    edges: Vec<Edge<V>>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<V: VertexId> Graph<V> {
    /// Creates a graph from explicit vertex and edge lists.
    #[must_use]
    pub const fn new(vertices: Vec<V>, edges: Vec<Edge<V>>) -> Self {
        Self { vertices, edges }
    }

    /// Returns the vertices in supply order.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[V] { &self.vertices }

    /// Returns the edges in supply order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<V>] { &self.edges }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges in a spanning tree over this vertex set.
    #[must_use]
    pub fn spanning_edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Checks that the graph can seed an engine.
    ///
    /// # Errors
    /// Returns [`EngineError::EmptyGraph`] when there are no vertices,
    /// [`EngineError::DuplicateVertex`] when a vertex repeats,
    /// [`EngineError::UnknownVertex`] when an edge names a vertex outside the
    /// vertex set, and [`EngineError::NonFiniteWeight`] when an edge weight is
    /// NaN or infinite.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::{Edge, EngineError, Graph};
    ///
    /// let graph = Graph::new(vec!["A", "B"], vec![Edge::new("A", "C", 1.0)]);
    /// let err = graph.validate().expect_err("C is not a vertex");
    /// assert!(matches!(err, EngineError::UnknownVertex { edge_index: 0, .. }));
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.vertices.is_empty() {
            return Err(EngineError::EmptyGraph);
        }

        let mut known = HashSet::with_capacity(self.vertices.len());
        for vertex in &self.vertices {
            if !known.insert(vertex) {
                return Err(EngineError::DuplicateVertex {
                    vertex: vertex.to_string(),
                });
            }
        }

        for (edge_index, edge) in self.edges.iter().enumerate() {
            for endpoint in [&edge.from, &edge.to] {
                if !known.contains(endpoint) {
                    return Err(EngineError::UnknownVertex {
                        vertex: endpoint.to_string(),
                        edge_index,
                    });
                }
            }
            if !edge.weight.is_finite() {
                return Err(EngineError::NonFiniteWeight {
                    edge_index,
                    from: edge.from.to_string(),
                    to: edge.to.to_string(),
                    weight: edge.weight,
                });
            }
        }

        Ok(())
    }
}
