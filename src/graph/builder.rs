//! Fluent API for building Graph instances.

use crate::types::{GraphResult, VertexId};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Collects values and edge pairs, then registers everything in one
/// [`build`](Self::build) call. Handles returned by [`vertex`](Self::vertex)
/// are valid in the built graph.
pub struct GraphBuilder<T> {
    values: Vec<T>,
    edges: Vec<(VertexId, VertexId)>,
}

impl<T> GraphBuilder<T> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a vertex holding `value` and return its handle.
    pub fn vertex(&mut self, value: T) -> VertexId {
        let id = VertexId::new(self.values.len());
        self.values.push(value);
        id
    }

    /// Add an undirected edge between two handles.
    pub fn edge(&mut self, v1: VertexId, v2: VertexId) -> &mut Self {
        self.edges.push((v1, v2));
        self
    }

    /// Build the final graph: create and register every vertex in insertion
    /// order, then connect the collected edges.
    ///
    /// Fails with [`GraphError::MissingVertex`] if an edge references a handle
    /// not issued by this builder.
    ///
    /// [`GraphError::MissingVertex`]: crate::types::GraphError::MissingVertex
    pub fn build(self) -> GraphResult<Graph<T>> {
        let mut graph = Graph::new();
        for value in self.values {
            let id = graph.create_vertex(value);
            graph.add_vertex(id);
        }
        for (v1, v2) in self.edges {
            graph.add_edge(v1, v2)?;
        }
        Ok(graph)
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
