//! Vertex handles and the core vertex struct.

use std::fmt;

use indexmap::IndexSet;

/// Opaque handle to a vertex, issued by [`Graph::create_vertex`].
///
/// Handles identify a vertex by *instance*, not by value: two vertices created
/// with equal values compare unequal. A handle is only meaningful for the
/// graph that issued it.
///
/// [`Graph::create_vertex`]: crate::graph::Graph::create_vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A labeled node holding a value and the set of its neighbors.
///
/// The adjacency set is insertion-ordered, so iterating it yields neighbors in
/// edge-insertion order. It is mutated only through the graph's edge
/// operations, which keep it symmetric with the neighbors' own sets.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    value: T,
    adjacent: IndexSet<VertexId>,
}

impl<T> Vertex<T> {
    /// Create a detached vertex with an empty adjacency set.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            adjacent: IndexSet::new(),
        }
    }

    /// The payload carried by this vertex.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the payload.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Neighbor handles in edge-insertion order.
    pub fn adjacent(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacent.iter().copied()
    }

    /// Number of neighbors (a self-loop counts once).
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    /// Whether `other` is a neighbor of this vertex.
    pub fn is_adjacent_to(&self, other: VertexId) -> bool {
        self.adjacent.contains(&other)
    }

    pub(crate) fn link(&mut self, other: VertexId) {
        self.adjacent.insert(other);
    }

    /// Order-preserving removal, so remaining neighbors keep their
    /// edge-insertion order.
    pub(crate) fn unlink(&mut self, other: VertexId) -> bool {
        self.adjacent.shift_remove(&other)
    }

    pub(crate) fn clear_adjacent(&mut self) {
        self.adjacent.clear();
    }
}
