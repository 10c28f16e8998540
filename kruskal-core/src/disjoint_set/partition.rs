//! Vertex-to-root snapshots of a [`super::DisjointSet`].

use crate::graph::VertexId;

/// The component membership of every vertex at a point in time.
///
/// Assignments are listed in vertex registration order. Renderers can use
/// [`ComponentPartition::component_index`] to pick a stable palette slot per
/// component; colour choice itself is left to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentPartition<V> {
    assignments: Vec<(V, V)>,
    component_count: usize,
}

impl<V: VertexId> ComponentPartition<V> {
    pub(crate) const fn new(assignments: Vec<(V, V)>, component_count: usize) -> Self {
        Self {
            assignments,
            component_count,
        }
    }

    /// Returns `(vertex, root)` pairs in vertex registration order.
    #[must_use]
    #[rustfmt::skip]
    pub fn assignments(&self) -> &[(V, V)] { &self.assignments }

    /// Returns the number of distinct roots.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when every vertex shares a single root.
    #[must_use]
    pub const fn is_spanning(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the number of vertices covered by the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns `true` when the snapshot covers no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Returns the root recorded for `vertex`.
    #[must_use]
    pub fn root_of(&self, vertex: &V) -> Option<&V> {
        self.assignments
            .iter()
            .find(|(candidate, _)| candidate == vertex)
            .map(|(_, root)| root)
    }

    /// Returns the distinct roots in order of first appearance.
    #[must_use]
    pub fn roots(&self) -> Vec<&V> {
        let mut roots: Vec<&V> = Vec::with_capacity(self.component_count);
        for (_, root) in &self.assignments {
            if !roots.contains(&root) {
                roots.push(root);
            }
        }
        roots
    }

    /// Returns the position of `vertex`'s root in [`Self::roots`].
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::DisjointSet;
    ///
    /// let mut set = DisjointSet::new(["A", "B", "C"]).expect("vertices are unique");
    /// set.union(&"B", &"C")?;
    /// let partition = set.partition();
    /// assert_eq!(partition.component_index(&"A"), Some(0));
    /// assert_eq!(partition.component_index(&"C"), Some(1));
    /// # Ok::<(), kruskal_core::DisjointSetError>(())
    /// ```
    #[must_use]
    pub fn component_index(&self, vertex: &V) -> Option<usize> {
        let root = self.root_of(vertex)?;
        self.roots().iter().position(|candidate| *candidate == root)
    }

    /// Groups vertices by component, components in order of first appearance.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<&V>> {
        let roots = self.roots();
        let mut groups: Vec<Vec<&V>> = vec![Vec::new(); roots.len()];
        for (vertex, root) in &self.assignments {
            if let Some(slot) = roots
                .iter()
                .position(|candidate| *candidate == root)
                .and_then(|position| groups.get_mut(position))
            {
                slot.push(vertex);
            }
        }
        groups
    }
}
