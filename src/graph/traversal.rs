//! Graph traversal algorithms (DFS and BFS).
//!
//! Both traversals are pure queries over the adjacency relation. Output order
//! is deterministic: neighbors are expanded in edge-insertion order, and a
//! vertex is marked seen the moment it enters the frontier, never on leaving
//! it. With a LIFO frontier that yields the standard iterative DFS order; with
//! a FIFO frontier, level order.

use std::collections::{HashSet, VecDeque};

use log::trace;

use crate::types::{GraphResult, VertexId};

use super::Graph;

impl<T> Graph<T> {
    /// Values of every vertex reachable from `start`, depth-first.
    ///
    /// Iterative: a stack seeded with `start`, a seen-set seeded with `start`;
    /// pop the most recently pushed vertex, record its value, push its unseen
    /// neighbors in adjacency order, marking each seen on push. Each reachable
    /// vertex appears exactly once; `start` itself is always first.
    ///
    /// Fails with [`GraphError::MissingVertex`] if `start` is not registered.
    ///
    /// [`GraphError::MissingVertex`]: crate::types::GraphError::MissingVertex
    pub fn depth_first_search(&self, start: VertexId) -> GraphResult<Vec<&T>> {
        self.require(start)?;

        let mut order: Vec<&T> = Vec::new();
        let mut seen: HashSet<VertexId> = HashSet::new();
        let mut stack: Vec<VertexId> = vec![start];
        seen.insert(start);

        while let Some(current) = stack.pop() {
            let Some(vertex) = self.vertex(current) else {
                continue;
            };
            order.push(vertex.value());

            for neighbor in vertex.adjacent() {
                if seen.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        trace!("dfs from {start} visited {} vertices", order.len());
        Ok(order)
    }

    /// Values of every vertex reachable from `start`, breadth-first.
    ///
    /// A queue seeded with `start`, a seen-set seeded with `start`; dequeue
    /// the oldest vertex, record its value, enqueue its unseen neighbors in
    /// adjacency order, marking each seen on enqueue. Produces the standard
    /// level-order traversal.
    ///
    /// Fails with [`GraphError::MissingVertex`] if `start` is not registered.
    ///
    /// [`GraphError::MissingVertex`]: crate::types::GraphError::MissingVertex
    pub fn breadth_first_search(&self, start: VertexId) -> GraphResult<Vec<&T>> {
        self.require(start)?;

        let mut order: Vec<&T> = Vec::new();
        let mut seen: HashSet<VertexId> = HashSet::new();
        let mut queue: VecDeque<VertexId> = VecDeque::new();
        seen.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let Some(vertex) = self.vertex(current) else {
                continue;
            };
            order.push(vertex.value());

            for neighbor in vertex.adjacent() {
                if seen.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        trace!("bfs from {start} visited {} vertices", order.len());
        Ok(order)
    }

    /// Whether a path exists between two registered vertices.
    ///
    /// Breadth-first with an early exit once `target` leaves the frontier.
    /// A vertex is trivially connected to itself.
    pub fn are_connected(&self, source: VertexId, target: VertexId) -> GraphResult<bool> {
        self.require(source)?;
        self.require(target)?;

        let mut seen: HashSet<VertexId> = HashSet::new();
        let mut queue: VecDeque<VertexId> = VecDeque::new();
        seen.insert(source);
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            if current == target {
                return Ok(true);
            }
            let Some(vertex) = self.vertex(current) else {
                continue;
            };
            for neighbor in vertex.adjacent() {
                if seen.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(false)
    }
}
