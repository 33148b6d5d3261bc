//! Error types for the undigraph library.

use thiserror::Error;

use super::VertexId;

/// All errors that can occur in the undigraph library.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An operand vertex is not registered in the graph's node set.
    ///
    /// Raised by the edge operations, vertex removal, and the traversal
    /// queries. Signals a caller usage error; the graph is left unchanged.
    #[error("graph does not contain vertex {0}")]
    MissingVertex(VertexId),
}

/// Convenience result type for undigraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
