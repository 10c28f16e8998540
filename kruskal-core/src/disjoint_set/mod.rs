//! Union-find (disjoint set union) over arbitrary vertex identifiers.
//!
//! The engine asks this structure whether two endpoints already share a
//! component before accepting an edge. Vertices are mapped to dense indices
//! at construction; `find` compresses every visited path onto its root and
//! `union` attaches by rank, so the per-edge cycle test stays near-constant.

mod partition;

use std::collections::HashMap;

use crate::{error::DisjointSetError, graph::VertexId};

pub use self::partition::ComponentPartition;

/// Disjoint set keyed by vertex identifier.
///
/// Every registered vertex starts as its own singleton component. Unknown
/// vertices are reported as [`DisjointSetError::UnknownVertex`] and are never
/// added implicitly.
///
/// # Examples
/// ```
/// use kruskal_core::DisjointSet;
///
/// let mut set = DisjointSet::new(["A", "B", "C"]).expect("vertices are unique");
/// assert!(set.union(&"A", &"B")?);
/// assert!(!set.union(&"B", &"A")?);
/// assert!(set.connected(&"A", &"B")?);
/// assert!(!set.connected(&"A", &"C")?);
/// assert_eq!(set.component_count(), 2);
/// # Ok::<(), kruskal_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl<V: VertexId> DisjointSet<V> {
    /// Registers every vertex as a singleton component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::DuplicateVertex`] when a vertex is supplied
    /// more than once.
    pub fn new(vertices: impl IntoIterator<Item = V>) -> Result<Self, DisjointSetError> {
        let vertices: Vec<V> = vertices.into_iter().collect();
        let mut index = HashMap::with_capacity(vertices.len());
        for (position, vertex) in vertices.iter().enumerate() {
            if index.insert(vertex.clone(), position).is_some() {
                return Err(DisjointSetError::DuplicateVertex {
                    vertex: vertex.to_string(),
                });
            }
        }

        let n = vertices.len();
        Ok(Self {
            vertices,
            index,
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        })
    }

    /// Splits every component back into singletons, keeping registrations.
    pub fn reset(&mut self) {
        for (node, parent) in self.parent.iter_mut().enumerate() {
            *parent = node;
        }
        self.rank.fill(0);
        self.components = self.vertices.len();
    }

    /// Returns the number of registered vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` when no vertices are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of disjoint components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.components }

    /// Returns `true` when `vertex` was registered at construction.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns the root of the component containing `vertex`.
    ///
    /// Every node visited on the way to the root is re-pointed directly at
    /// the root.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownVertex`] for unregistered vertices.
    pub fn find(&mut self, vertex: &V) -> Result<&V, DisjointSetError> {
        let node = self.index_of(vertex)?;
        let root = self.find_index(node);
        Ok(&self.vertices[root])
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `false` without mutating anything when both already share a
    /// root. Otherwise the lower-rank root is attached beneath the
    /// higher-rank root; on equal ranks `right`'s root goes beneath `left`'s
    /// and the surviving rank grows by one.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownVertex`] for unregistered vertices.
    pub fn union(&mut self, left: &V, right: &V) -> Result<bool, DisjointSetError> {
        let left = self.index_of(left)?;
        let right = self.index_of(right)?;
        Ok(self.union_indices(left, right))
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownVertex`] for unregistered vertices.
    pub fn connected(&mut self, left: &V, right: &V) -> Result<bool, DisjointSetError> {
        let left = self.index_of(left)?;
        let right = self.index_of(right)?;
        Ok(self.connected_indices(left, right))
    }

    /// Returns the current vertex-to-root mapping in registration order.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::DisjointSet;
    ///
    /// let mut set = DisjointSet::new([1_u32, 2, 3]).expect("vertices are unique");
    /// set.union(&1, &3)?;
    /// let partition = set.partition();
    /// assert_eq!(partition.component_count(), 2);
    /// assert_eq!(partition.root_of(&3), partition.root_of(&1));
    /// # Ok::<(), kruskal_core::DisjointSetError>(())
    /// ```
    pub fn partition(&mut self) -> ComponentPartition<V> {
        let assignments = (0..self.vertices.len())
            .map(|node| {
                let root = self.find_index(node);
                (self.vertices[node].clone(), self.vertices[root].clone())
            })
            .collect();
        ComponentPartition::new(assignments, self.components)
    }

    pub(crate) fn index_of(&self, vertex: &V) -> Result<usize, DisjointSetError> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| DisjointSetError::UnknownVertex {
                vertex: vertex.to_string(),
            })
    }

    pub(crate) fn find_index(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    pub(crate) fn connected_indices(&mut self, left: usize, right: usize) -> bool {
        self.find_index(left) == self.find_index(right)
    }

    pub(crate) fn union_indices(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find_index(left);
        let mut right = self.find_index(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components = self.components.saturating_sub(1);
        true
    }

    #[cfg(test)]
    pub(crate) fn raw_parent(&self, vertex: &V) -> Option<&V> {
        let node = self.index.get(vertex)?;
        self.vertices.get(self.parent[*node])
    }

    #[cfg(test)]
    pub(crate) fn rank_of(&self, vertex: &V) -> Option<u8> {
        self.index.get(vertex).map(|node| self.rank[*node])
    }
}
