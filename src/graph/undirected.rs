//! Core graph structure — an arena of vertices plus the registered node set.

use indexmap::IndexSet;
use log::{debug, trace};

use crate::types::{GraphError, GraphResult, Vertex, VertexId};

/// An undirected graph over values of type `T`.
///
/// Vertices live in an arena owned by the graph and are addressed by
/// [`VertexId`] handles; adjacency is stored per vertex as a set of handles.
/// A vertex is first *created* (allocated in the arena, detached) and then
/// *added* (registered in the node set); only registered vertices participate
/// in edge operations and traversals.
///
/// Two invariants hold at all times for registered vertices:
/// - symmetry: `a` is adjacent to `b` iff `b` is adjacent to `a`;
/// - no dangling adjacency: every neighbor handle is itself registered.
pub struct Graph<T> {
    /// Every vertex ever created through this graph, indexed by handle.
    arena: Vec<Vertex<T>>,
    /// Handles currently registered in the graph.
    nodes: IndexSet<VertexId>,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            nodes: IndexSet::new(),
        }
    }

    /// Allocate a detached vertex holding `value` and return its handle.
    ///
    /// The vertex is not yet part of the graph; register it with
    /// [`add_vertex`](Self::add_vertex) before connecting edges to it.
    pub fn create_vertex(&mut self, value: T) -> VertexId {
        let id = VertexId::new(self.arena.len());
        self.arena.push(Vertex::new(value));
        trace!("created {id}");
        id
    }

    /// Register a vertex in the node set. Idempotent: re-adding a registered
    /// vertex changes nothing.
    pub fn add_vertex(&mut self, v: VertexId) {
        if self.vertex(v).is_some() {
            self.nodes.insert(v);
        }
    }

    /// Register each vertex in the sequence, in order.
    pub fn add_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = VertexId>,
    {
        for v in vertices {
            self.add_vertex(v);
        }
    }

    /// Connect two registered vertices with an undirected edge.
    ///
    /// Inserts each endpoint into the other's adjacency set; re-adding an
    /// existing edge is a no-op. Self-loops are accepted: the vertex becomes
    /// its own neighbor. Fails with [`GraphError::MissingVertex`] if either
    /// endpoint is not registered, leaving the graph unchanged.
    pub fn add_edge(&mut self, v1: VertexId, v2: VertexId) -> GraphResult<()> {
        self.require(v1)?;
        self.require(v2)?;
        self.arena[v1.index()].link(v2);
        self.arena[v2.index()].link(v1);
        trace!("edge {v1} -- {v2}");
        Ok(())
    }

    /// Disconnect two registered vertices.
    ///
    /// Removing an edge that does not exist is a no-op. Fails with
    /// [`GraphError::MissingVertex`] if either endpoint is not registered.
    pub fn remove_edge(&mut self, v1: VertexId, v2: VertexId) -> GraphResult<()> {
        self.require(v1)?;
        self.require(v2)?;
        self.arena[v1.index()].unlink(v2);
        self.arena[v2.index()].unlink(v1);
        trace!("removed edge {v1} -- {v2}");
        Ok(())
    }

    /// Deregister a vertex and scrub every back-reference to it.
    ///
    /// Scans the remaining registered vertices and removes `v` from their
    /// adjacency sets, restoring the no-dangling-adjacency invariant (O(V)).
    /// The handle stays valid for [`value`](Self::value) access and may be
    /// re-registered later; its own adjacency set is cleared so a
    /// re-registered vertex starts disconnected.
    pub fn remove_vertex(&mut self, v: VertexId) -> GraphResult<()> {
        self.require(v)?;
        self.nodes.shift_remove(&v);
        self.arena[v.index()].clear_adjacent();

        let mut scrubbed = 0usize;
        for &u in &self.nodes {
            if self.arena[u.index()].unlink(v) {
                scrubbed += 1;
            }
        }
        debug!("removed {v}, scrubbed {scrubbed} back-references");
        Ok(())
    }

    /// Whether `v` is registered in the graph.
    pub fn contains(&self, v: VertexId) -> bool {
        self.nodes.contains(&v)
    }

    /// The value held by `v`, if the handle was issued by this graph.
    /// Works for detached and removed vertices too.
    pub fn value(&self, v: VertexId) -> Option<&T> {
        self.vertex(v).map(Vertex::value)
    }

    /// Mutable access to the value held by `v`.
    pub fn value_mut(&mut self, v: VertexId) -> Option<&mut T> {
        self.arena.get_mut(v.index()).map(Vertex::value_mut)
    }

    /// Neighbors of a registered vertex, in edge-insertion order.
    pub fn neighbors(&self, v: VertexId) -> GraphResult<impl Iterator<Item = VertexId> + '_> {
        self.require(v)?;
        Ok(self.arena[v.index()].adjacent())
    }

    /// Whether an edge connects `v1` and `v2`. False if either vertex is not
    /// registered.
    pub fn has_edge(&self, v1: VertexId, v2: VertexId) -> bool {
        self.contains(v1)
            && self.contains(v2)
            && self.arena[v1.index()].is_adjacent_to(v2)
    }

    /// Number of neighbors of a registered vertex (a self-loop counts once).
    pub fn degree(&self, v: VertexId) -> GraphResult<usize> {
        self.require(v)?;
        Ok(self.arena[v.index()].degree())
    }

    /// Number of registered vertices.
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges (a self-loop counts as one edge).
    pub fn edge_count(&self) -> usize {
        let mut endpoints = 0usize;
        let mut loops = 0usize;
        for &v in &self.nodes {
            let vertex = &self.arena[v.index()];
            endpoints += vertex.degree();
            if vertex.is_adjacent_to(v) {
                loops += 1;
            }
        }
        // Each proper edge appears in two adjacency sets, a loop in one.
        (endpoints + loops) / 2
    }

    /// Whether the graph has no registered vertices.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Handles of the registered vertices, in registration order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.nodes.iter().copied()
    }

    /// Look up a vertex by handle regardless of registration status.
    pub(crate) fn vertex(&self, v: VertexId) -> Option<&Vertex<T>> {
        self.arena.get(v.index())
    }

    /// Check that `v` is registered, for operations that demand it.
    pub(crate) fn require(&self, v: VertexId) -> GraphResult<()> {
        if self.contains(v) {
            Ok(())
        } else {
            Err(GraphError::MissingVertex(v))
        }
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
