//! undigraph — undirected adjacency-set graph with DFS and BFS traversal.
//!
//! Vertices are arena-allocated and addressed by opaque [`VertexId`] handles,
//! so identity is per instance: two vertices with equal values stay distinct.
//! Edges are undirected and symmetric; traversals walk the adjacency relation
//! in edge-insertion order, making their output deterministic.
//!
//! ```
//! use undigraph::{Graph, GraphResult};
//!
//! fn main() -> GraphResult<()> {
//!     let mut graph = Graph::new();
//!     let a = graph.create_vertex("A");
//!     let b = graph.create_vertex("B");
//!     let c = graph.create_vertex("C");
//!     graph.add_vertices([a, b, c]);
//!     graph.add_edge(a, b)?;
//!     graph.add_edge(b, c)?;
//!
//!     let visited = graph.breadth_first_search(a)?;
//!     assert_eq!(visited, [&"A", &"B", &"C"]);
//!     Ok(())
//! }
//! ```

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder};
pub use types::{GraphError, GraphResult, Vertex, VertexId};
