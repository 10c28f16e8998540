//! Builder utilities for assembling graphs and engines.
//!
//! Exposes [`GraphBuilder`], which collects vertices and edges in supply order
//! and validates them before constructing a [`Graph`] or [`KruskalEngine`].

use crate::{
    Result,
    engine::KruskalEngine,
    graph::{Edge, Graph, VertexId},
};

/// Collects vertices and edges and validates them on [`GraphBuilder::build`].
///
/// Edge order is preserved; it decides the processing order of equal-weight
/// edges.
///
/// # Examples
/// ```
/// use kruskal_core::GraphBuilder;
///
/// let graph = GraphBuilder::new()
///     .with_vertices(["A", "B", "C"])
///     .with_edge("A", "B", 1.0)
///     .with_edge("B", "C", 2.0)
///     .build()
///     .expect("graph is valid");
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edges().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder<V> {
    vertices: Vec<V>,
    edges: Vec<Edge<V>>,
}

impl<V> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<V: VertexId> GraphBuilder<V> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single vertex.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::GraphBuilder;
    ///
    /// let builder = GraphBuilder::new().with_vertex(7_u32);
    /// assert_eq!(builder.vertices(), &[7]);
    /// ```
    #[must_use]
    pub fn with_vertex(mut self, vertex: V) -> Self {
        self.vertices.push(vertex);
        self
    }

    /// Appends every vertex yielded by `vertices`.
    #[must_use]
    pub fn with_vertices(mut self, vertices: impl IntoIterator<Item = V>) -> Self {
        self.vertices.extend(vertices);
        self
    }

    /// Appends an undirected edge.
    #[must_use]
    pub fn with_edge(mut self, from: V, to: V, weight: f64) -> Self {
        self.edges.push(Edge::new(from, to, weight));
        self
    }

    /// Appends every edge yielded by `edges`.
    #[must_use]
    pub fn with_edges(mut self, edges: impl IntoIterator<Item = Edge<V>>) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Returns the vertices collected so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[V] { &self.vertices }

    /// Returns the edges collected so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<V>] { &self.edges }

    /// Validates the collected input and returns the [`Graph`].
    ///
    /// # Errors
    /// Propagates the [`crate::EngineError`] reported by [`Graph::validate`].
    pub fn build(self) -> Result<Graph<V>> {
        let graph = Graph::new(self.vertices, self.edges);
        graph.validate()?;
        Ok(graph)
    }

    /// Validates the collected input and constructs a ready [`KruskalEngine`].
    ///
    /// # Errors
    /// Propagates the [`crate::EngineError`] reported by [`Graph::validate`].
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::{EngineStatus, GraphBuilder};
    ///
    /// let engine = GraphBuilder::new()
    ///     .with_vertices([1_u32, 2])
    ///     .with_edge(1, 2, 4.0)
    ///     .build_engine()
    ///     .expect("graph is valid");
    /// assert_eq!(engine.status(), EngineStatus::Idle);
    /// ```
    pub fn build_engine(self) -> Result<KruskalEngine<V>> {
        KruskalEngine::new(Graph::new(self.vertices, self.edges))
    }
}
